use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    read_stake, read_total_staked, read_vote_count, read_voted_price, remove_voted_price,
    write_stake, write_total_staked, write_vote_count,
};

use super::utils::transfer::transfer_out;
use super::utils::validation::require_positive_amount;
use super::utils::weighted_sum::{add_contribution, remove_contribution};

pub fn unstake(env: &Env, who: &Address, amount: i128) -> Result<(), Error> {
    who.require_auth();

    require_positive_amount(env, amount);

    let stake_before = read_stake(env, who);
    if amount > stake_before {
        return Err(Error::InsufficientStake);
    }

    transfer_out(env, who, amount)?;

    let stake_after = stake_before
        .checked_sub(amount)
        .ok_or(Error::MathOverflowError)?;
    let total_staked = read_total_staked(env)
        .checked_sub(amount)
        .ok_or(Error::MathOverflowError)?;

    write_stake(env, who, stake_after);
    write_total_staked(env, total_staked);

    if let Some(price) = read_voted_price(env, who) {
        remove_contribution(env, price, stake_before)?;

        if stake_after == 0 {
            // a participant with nothing at stake holds no vote
            remove_voted_price(env, who);
            let vote_count = read_vote_count(env)
                .checked_sub(1)
                .ok_or(Error::MathOverflowError)?;
            write_vote_count(env, vote_count);
        } else {
            add_contribution(env, price, stake_after)?;
        }
    }

    event::unstake(env, who, amount);

    Ok(())
}
