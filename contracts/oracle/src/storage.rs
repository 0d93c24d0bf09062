use common::WeightedPrice;
use oracle_interface::types::error::Error;
use oracle_interface::types::twap_data::TwapData;
use soroban_sdk::{contracttype, Address, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    StakingToken,
    TotalStaked,
    WeightedPriceSum,
    VoteCount,
    Twap,
    Stake(Address),
    VotedPrice(Address),
}

pub fn has_admin(env: &Env) -> bool {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_staking_token(env: &Env, asset: &Address) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::StakingToken, asset);
}

pub fn read_staking_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::StakingToken)
        .ok_or(Error::Uninitialized)
}

pub fn read_total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0i128)
}

pub fn write_total_staked(env: &Env, total: i128) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::TotalStaked, &total);
}

pub fn read_weighted_price_sum(env: &Env) -> WeightedPrice {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    WeightedPrice::from_inner(
        env.storage()
            .instance()
            .get(&DataKey::WeightedPriceSum)
            .unwrap_or(0i128),
    )
}

pub fn write_weighted_price_sum(env: &Env, sum: &WeightedPrice) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .set(&DataKey::WeightedPriceSum, &sum.into_inner());
}

pub fn read_vote_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::VoteCount)
        .unwrap_or(0u32)
}

pub fn write_vote_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::VoteCount, &count);
}

pub fn read_twap(env: &Env) -> Result<TwapData, Error> {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage()
        .instance()
        .get(&DataKey::Twap)
        .ok_or(Error::Uninitialized)
}

pub fn write_twap(env: &Env, data: &TwapData) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);

    env.storage().instance().set(&DataKey::Twap, data);
}

pub fn read_stake(env: &Env, who: &Address) -> i128 {
    let key = DataKey::Stake(who.clone());
    let stake = env.storage().persistent().get(&key);

    if stake.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    stake.unwrap_or(0i128)
}

pub fn write_stake(env: &Env, who: &Address, stake: i128) {
    let key = DataKey::Stake(who.clone());
    env.storage().persistent().set(&key, &stake);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn read_voted_price(env: &Env, who: &Address) -> Option<i128> {
    let key = DataKey::VotedPrice(who.clone());
    let price = env.storage().persistent().get(&key);

    if price.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    price
}

pub fn write_voted_price(env: &Env, who: &Address, price: i128) {
    let key = DataKey::VotedPrice(who.clone());
    env.storage().persistent().set(&key, &price);
    env.storage().persistent().extend_ttl(
        &key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

// key absence is what marks a participant as not voting, zero is a valid price
pub fn remove_voted_price(env: &Env, who: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::VotedPrice(who.clone()));
}
