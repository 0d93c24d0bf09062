use oracle_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::storage::read_staking_token;

/// Pulls `amount` of the staking token from `from` into contract custody
pub fn transfer_in(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let asset = read_staking_token(env)?;

    token::Client::new(env, &asset)
        .try_transfer(from, &env.current_contract_address(), &amount)
        .map_err(|_| Error::TransferFailed)?
        .map_err(|_| Error::TransferFailed)
}

/// Releases `amount` of the staking token from custody back to `to`
pub fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let asset = read_staking_token(env)?;

    token::Client::new(env, &asset)
        .try_transfer(&env.current_contract_address(), to, &amount)
        .map_err(|_| Error::TransferFailed)?
        .map_err(|_| Error::TransferFailed)
}
