use common::WeightedPrice;
use oracle_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::read_twap;

/// Projects the open interval at the last price, storage stays untouched
pub fn twap(env: &Env) -> Result<i128, Error> {
    let data = read_twap(env)?;
    let now = env.ledger().timestamp();

    let total_elapsed = now
        .checked_sub(data.epoch_start)
        .ok_or(Error::MathOverflowError)?;
    if total_elapsed == 0 {
        return Err(Error::NoObservations);
    }

    let open_interval = now
        .checked_sub(data.last_update_timestamp)
        .ok_or(Error::MathOverflowError)?;

    WeightedPrice::from_inner(data.cumulative_price_time)
        .accumulate(data.last_price, open_interval)
        .ok_or(Error::MathOverflowError)?
        .per_unit(total_elapsed)
        .ok_or(Error::MathOverflowError)
}
