use oracle_interface::types::error::Error;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env};

use crate::storage::{has_admin, read_admin};

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

/// Caller must authorize the call and match the stored admin
pub fn require_admin(env: &Env, who: &Address) -> Result<(), Error> {
    who.require_auth();

    let admin = read_admin(env)?;
    if admin != *who {
        return Err(Error::Unauthorized);
    }

    Ok(())
}

pub fn require_positive_amount(env: &Env, amount: i128) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_non_negative_price(env: &Env, price: i128) {
    assert_with_error!(env, price >= 0, Error::InvalidPrice);
}
