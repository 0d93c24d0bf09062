use common::WeightedPrice;
use oracle_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{read_twap, write_twap};

/// Closes the open interval at the previous price and opens a new one at `price`
pub fn observe_price(env: &Env, price: i128) -> Result<(), Error> {
    let mut data = read_twap(env)?;
    let now = env.ledger().timestamp();

    let elapsed = now
        .checked_sub(data.last_update_timestamp)
        .ok_or(Error::MathOverflowError)?;
    let cumulative = WeightedPrice::from_inner(data.cumulative_price_time)
        .accumulate(data.last_price, elapsed)
        .ok_or(Error::MathOverflowError)?;

    data.cumulative_price_time = cumulative.into_inner();
    data.last_price = price;
    data.last_update_timestamp = now;

    write_twap(env, &data);

    Ok(())
}
