use common::WeightedPrice;
use oracle_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::{read_weighted_price_sum, write_weighted_price_sum};

/// Adds a `price * weight` contribution to the stored weighted price sum
pub fn add_contribution(env: &Env, price: i128, weight: i128) -> Result<(), Error> {
    let term = WeightedPrice::from_product(price, weight).ok_or(Error::MathOverflowError)?;
    let sum = read_weighted_price_sum(env)
        .checked_add(term)
        .ok_or(Error::MathOverflowError)?;

    write_weighted_price_sum(env, &sum);

    Ok(())
}

/// Removes a previously added `price * weight` contribution
pub fn remove_contribution(env: &Env, price: i128, weight: i128) -> Result<(), Error> {
    let term = WeightedPrice::from_product(price, weight).ok_or(Error::MathOverflowError)?;
    let sum = read_weighted_price_sum(env)
        .checked_sub(term)
        .ok_or(Error::MathOverflowError)?;

    write_weighted_price_sum(env, &sum);

    Ok(())
}
