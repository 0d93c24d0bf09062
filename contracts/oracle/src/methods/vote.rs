use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    read_stake, read_vote_count, read_voted_price, write_vote_count, write_voted_price,
};

use super::average_price::average_price;
use super::utils::observation::observe_price;
use super::utils::validation::require_non_negative_price;
use super::utils::weighted_sum::{add_contribution, remove_contribution};

pub fn vote(env: &Env, who: &Address, price: i128) -> Result<(), Error> {
    who.require_auth();

    require_non_negative_price(env, price);

    let stake = read_stake(env, who);
    if stake == 0 {
        return Err(Error::NoStake);
    }

    match read_voted_price(env, who) {
        Some(old_price) => remove_contribution(env, old_price, stake)?,
        None => {
            let vote_count = read_vote_count(env)
                .checked_add(1)
                .ok_or(Error::MathOverflowError)?;
            write_vote_count(env, vote_count);
        }
    }

    add_contribution(env, price, stake)?;
    write_voted_price(env, who, price);

    // the accumulator tracks the aggregate as it stands after this vote
    let average = average_price(env)?;
    observe_price(env, average)?;

    event::vote(env, who, price, average);

    Ok(())
}
