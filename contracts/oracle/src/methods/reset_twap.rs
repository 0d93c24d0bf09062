use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{read_twap, write_twap};

use super::utils::validation::require_admin;

pub fn reset_twap(env: &Env, who: &Address) -> Result<(), Error> {
    require_admin(env, who)?;

    let mut data = read_twap(env)?;
    let now = env.ledger().timestamp();

    // last_price stays, the new epoch accrues at the price known so far
    data.cumulative_price_time = 0;
    data.last_update_timestamp = now;
    data.epoch_start = now;

    write_twap(env, &data);

    event::twap_reset(env, who, data.last_price);

    Ok(())
}
