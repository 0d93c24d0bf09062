use oracle_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::write_admin;

use super::utils::validation::require_admin;

pub fn transfer_admin(env: &Env, who: &Address, new_admin: &Address) -> Result<(), Error> {
    require_admin(env, who)?;

    write_admin(env, new_admin);

    event::admin_changed(env, who, new_admin);

    Ok(())
}
