use common::WeightedPrice;
use oracle_interface::types::error::Error;
use oracle_interface::types::twap_data::TwapData;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    write_admin, write_staking_token, write_total_staked, write_twap, write_vote_count,
    write_weighted_price_sum,
};

use super::utils::validation::require_admin_not_exist;

pub fn initialize(env: &Env, admin: &Address, staking_token: &Address) -> Result<(), Error> {
    require_admin_not_exist(env);

    write_admin(env, admin);
    write_staking_token(env, staking_token);
    write_total_staked(env, 0);
    write_weighted_price_sum(env, &WeightedPrice::ZERO);
    write_vote_count(env, 0);
    write_twap(env, &TwapData::new(env));

    event::initialized(env, admin, staking_token);

    Ok(())
}
