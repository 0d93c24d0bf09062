#![cfg(test)]

use crate::tests::sut::{fill_stake, init_oracle, UNIT};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
#[should_panic(expected = "HostError: Error(Contract, #200)")]
fn should_fail_when_no_staked_tokens() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);

    sut.oracle.average_price();
}

#[test]
fn should_return_zero_when_no_votes() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);
    let user = Address::generate(&env);

    fill_stake(&sut, &user, 100 * UNIT);

    assert_eq!(sut.oracle.average_price(), 0);
}

#[test]
fn should_truncate_towards_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_oracle(&env);
    let x = Address::generate(&env);
    let y = Address::generate(&env);

    fill_stake(&sut, &x, 1 * UNIT);
    fill_stake(&sut, &y, 2 * UNIT);
    sut.oracle.vote(&x, &(100 * UNIT));
    sut.oracle.vote(&y, &(350 * UNIT));

    // 800 / 3 leaves a remainder; the fractional part is dropped
    assert_eq!(sut.oracle.average_price(), 266_666_666_666);
}
