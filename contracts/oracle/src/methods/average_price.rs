use oracle_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{read_total_staked, read_weighted_price_sum};

pub fn average_price(env: &Env) -> Result<i128, Error> {
    let total_staked = read_total_staked(env);
    if total_staked == 0 {
        return Err(Error::NoStakedTokens);
    }

    read_weighted_price_sum(env)
        .per_unit(total_staked)
        .ok_or(Error::MathOverflowError)
}
