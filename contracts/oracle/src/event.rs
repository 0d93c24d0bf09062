use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, admin: &Address, staking_token: &Address) {
    let topics = (Symbol::new(e, "initialize"), admin);
    e.events().publish(topics, staking_token.clone());
}

pub(crate) fn stake(e: &Env, who: &Address, amount: i128) {
    let topics = (symbol_short!("stake"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn unstake(e: &Env, who: &Address, amount: i128) {
    let topics = (symbol_short!("unstake"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn vote(e: &Env, who: &Address, price: i128, average: i128) {
    let topics = (symbol_short!("vote"), who.clone());
    e.events().publish(topics, (price, average));
}

pub(crate) fn twap_reset(e: &Env, who: &Address, carried_price: i128) {
    let topics = (Symbol::new(e, "reset_twap"), who.clone());
    e.events().publish(topics, carried_price);
}

pub(crate) fn admin_changed(e: &Env, admin: &Address, new_admin: &Address) {
    let topics = (Symbol::new(e, "transfer_admin"), admin.clone());
    e.events().publish(topics, new_admin.clone());
}
