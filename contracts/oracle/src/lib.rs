#![deny(warnings)]
#![no_std]

use common::PRICE_DECIMALS;
use methods::{
    average_price::average_price, initialize::initialize, reset_twap::reset_twap, stake::stake,
    transfer_admin::transfer_admin, twap::twap, unstake::unstake, vote::vote,
};
use oracle_interface::types::error::Error;
use oracle_interface::types::twap_data::TwapData;
use oracle_interface::PriceOracleTrait;
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct PriceOracle;

#[contractimpl]
impl PriceOracleTrait for PriceOracle {
    fn initialize(env: Env, admin: Address, staking_token: Address) -> Result<(), Error> {
        initialize(&env, &admin, &staking_token)
    }

    fn version() -> u32 {
        1
    }

    fn stake(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        stake(&env, &who, amount)
    }

    fn unstake(env: Env, who: Address, amount: i128) -> Result<(), Error> {
        unstake(&env, &who, amount)
    }

    fn vote(env: Env, who: Address, price: i128) -> Result<(), Error> {
        vote(&env, &who, price)
    }

    fn average_price(env: Env) -> Result<i128, Error> {
        average_price(&env)
    }

    fn twap(env: Env) -> Result<i128, Error> {
        twap(&env)
    }

    fn reset_twap(env: Env, who: Address) -> Result<(), Error> {
        reset_twap(&env, &who)
    }

    fn transfer_admin(env: Env, who: Address, new_admin: Address) -> Result<(), Error> {
        transfer_admin(&env, &who, &new_admin)
    }

    fn admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }

    fn staking_token(env: Env) -> Result<Address, Error> {
        read_staking_token(&env)
    }

    fn staked(env: Env, who: Address) -> i128 {
        read_stake(&env, &who)
    }

    fn voted_price(env: Env, who: Address) -> Option<i128> {
        read_voted_price(&env, &who)
    }

    fn total_staked(env: Env) -> i128 {
        read_total_staked(&env)
    }

    fn vote_count(env: Env) -> u32 {
        read_vote_count(&env)
    }

    fn twap_data(env: Env) -> Result<TwapData, Error> {
        read_twap(&env)
    }

    fn decimals(_env: Env) -> u32 {
        PRICE_DECIMALS
    }
}
