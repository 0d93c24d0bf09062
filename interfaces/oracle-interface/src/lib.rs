#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::error::Error;
use types::twap_data::TwapData;

pub mod types;

pub struct Spec;

/// Interface for the stake-weighted price oracle
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracleTrait {
    fn initialize(env: Env, admin: Address, staking_token: Address) -> Result<(), Error>;

    fn version() -> u32;

    /// Lock `amount` of the staking token as voting weight
    fn stake(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    /// Release `amount` of previously locked stake back to `who`
    fn unstake(env: Env, who: Address, amount: i128) -> Result<(), Error>;

    /// Submit a price observation weighted by the caller's stake.
    /// Replaces the caller's previous observation if any
    fn vote(env: Env, who: Address, price: i128) -> Result<(), Error>;

    /// Current stake-weighted average price
    fn average_price(env: Env) -> Result<i128, Error>;

    /// Time-weighted average price since the start of the current epoch
    fn twap(env: Env) -> Result<i128, Error>;

    /// Start a fresh TWAP epoch. Admin only
    fn reset_twap(env: Env, who: Address) -> Result<(), Error>;

    /// Hand administration over to `new_admin`. Admin only
    fn transfer_admin(env: Env, who: Address, new_admin: Address) -> Result<(), Error>;

    fn admin(env: Env) -> Result<Address, Error>;

    fn staking_token(env: Env) -> Result<Address, Error>;

    /// Stake locked by `who`, zero when nothing is staked
    fn staked(env: Env, who: Address) -> i128;

    /// Last price voted by `who`, None when `who` holds no active vote
    fn voted_price(env: Env, who: Address) -> Option<i128>;

    fn total_staked(env: Env) -> i128;

    /// Number of participants with an active vote
    fn vote_count(env: Env) -> u32;

    /// Raw state of the TWAP accumulator
    fn twap_data(env: Env) -> Result<TwapData, Error>;

    /// Return the number of decimals of reported prices
    fn decimals(env: Env) -> u32;
}
