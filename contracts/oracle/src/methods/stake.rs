use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    read_stake, read_total_staked, read_voted_price, write_stake, write_total_staked,
};

use super::utils::transfer::transfer_in;
use super::utils::validation::require_positive_amount;
use super::utils::weighted_sum::{add_contribution, remove_contribution};

pub fn stake(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_positive_amount(env, amount);

    transfer_in(env, who, amount)?;

    let stake_before = read_stake(env, who);
    let stake_after = stake_before
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;
    let total_staked = read_total_staked(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflowError)?;

    write_stake(env, who, stake_after);
    write_total_staked(env, total_staked);

    // an active vote keeps its price but gains weight
    if let Some(price) = read_voted_price(env, who) {
        remove_contribution(env, price, stake_before)?;
        add_contribution(env, price, stake_after)?;
    }

    event::stake(env, who, amount);

    Ok(())
}
