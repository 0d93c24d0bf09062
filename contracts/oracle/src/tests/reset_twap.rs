#![cfg(test)]
extern crate std;

use crate::tests::sut::{fill_stake, init_oracle, set_time, UNIT};
use crate::*;
use soroban_sdk::testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation};
use soroban_sdk::{vec, IntoVal, Symbol};

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn should_fail_when_uninitialized() {
    let env = Env::default();
    env.mock_all_auths();

    let oracle = PriceOracleClient::new(&env, &env.register_contract(None, PriceOracle));
    let who = Address::generate(&env);

    oracle.reset_twap(&who);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn should_fail_when_not_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);
    let user = Address::generate(&env);

    sut.oracle.reset_twap(&user);
}

#[test]
fn should_require_authorized_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    sut.oracle.reset_twap(&sut.admin);

    assert_eq!(
        env.auths(),
        [(
            sut.admin.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    sut.oracle.address.clone(),
                    Symbol::new(&env, "reset_twap"),
                    vec![&env, sut.admin.into_val(&env)]
                )),
                sub_invocations: std::vec![]
            }
        )]
    );
}

#[test]
fn should_reset_accumulator_and_anchor() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);
    let user = Address::generate(&env);

    fill_stake(&sut, &user, 100 * UNIT);
    sut.oracle.vote(&user, &(500 * UNIT));
    set_time(&env, 100);

    sut.oracle.reset_twap(&sut.admin);

    let data = sut.oracle.twap_data();
    assert_eq!(data.cumulative_price_time, 0);
    assert_eq!(data.last_price, 500 * UNIT);
    assert_eq!(data.last_update_timestamp, 100);
    assert_eq!(data.epoch_start, 100);
}

#[test]
fn should_start_fresh_epoch() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);
    let user = Address::generate(&env);

    fill_stake(&sut, &user, 500 * UNIT);
    sut.oracle.vote(&user, &(9000 * UNIT));
    set_time(&env, 100);

    sut.oracle.reset_twap(&sut.admin);

    sut.oracle.vote(&user, &(3000 * UNIT));
    set_time(&env, 300);
    sut.oracle.vote(&user, &(3200 * UNIT));
    set_time(&env, 350);
    sut.oracle.vote(&user, &(3150 * UNIT));

    // the pre-reset price history is gone, only the new epoch counts
    assert_eq!(sut.oracle.twap(), 3040 * UNIT);
}

#[test]
fn should_carry_last_price_into_new_epoch() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);
    let user = Address::generate(&env);

    fill_stake(&sut, &user, 100 * UNIT);
    sut.oracle.vote(&user, &(1000 * UNIT));
    set_time(&env, 100);

    sut.oracle.reset_twap(&sut.admin);
    set_time(&env, 150);

    // no vote since the reset, the carried price covers the whole epoch
    assert_eq!(sut.oracle.twap(), 1000 * UNIT);

    sut.oracle.vote(&user, &(2000 * UNIT));
    set_time(&env, 200);

    assert_eq!(sut.oracle.twap(), 1500 * UNIT);
}
