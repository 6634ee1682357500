#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};

use crate::{ContractError, StakingContract, StakingContractClient};

fn setup_test() -> (
    Env,
    StakingContractClient<'static>,
    Address, // admin
    Address, // token
) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token_id = token.address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &token_id, &true, &true, &100);

    (env, client, admin, token_id)
}

fn mint(env: &Env, token: &Address, recipient: &Address, amount: i128) {
    StellarAssetClient::new(env, token)
        .mock_all_auths()
        .mint(recipient, &amount);
}

#[test]
fn test_pause_blocks_stake_and_unstake() {
    let (env, client, admin, token) = setup_test();

    let staker = Address::generate(&env);
    mint(&env, &token, &staker, 2_000);

    env.ledger().set_timestamp(0);
    let id = client.stake(&staker, &1_000, &100);

    client.pause(&admin);
    assert!(client.is_paused());

    let res = client.try_stake(&staker, &1_000, &100);
    match res {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }

    let res = client.try_unstake(&staker, &id);
    match res {
        Err(Ok(e)) => assert_eq!(e, ContractError::Paused),
        _ => unreachable!("Expected Paused error"),
    }
}

#[test]
fn test_reads_succeed_while_paused() {
    let (env, client, admin, token) = setup_test();

    let staker = Address::generate(&env);
    mint(&env, &token, &staker, 1_000);

    env.ledger().set_timestamp(0);
    let id = client.stake(&staker, &1_000, &100);

    client.pause(&admin);

    // Read paths stay open while mutators are halted.
    env.ledger().set_timestamp(50);
    assert_eq!(client.claimable_amount(&id, &staker), 1_500);
    assert_eq!(client.get_reward_rate(), 100);
    assert_eq!(client.get_position(&id).principal, 1_000);
    assert_eq!(client.get_total_staked(), 1_000);
}

#[test]
fn test_unpause_restores_operations() {
    let (env, client, admin, token) = setup_test();

    let staker = Address::generate(&env);
    mint(&env, &token, &staker, 1_000);

    client.pause(&admin);
    client.unpause(&admin);
    assert!(!client.is_paused());

    client.stake(&staker, &1_000, &100);
    assert_eq!(client.get_total_staked(), 1_000);
}

#[test]
fn test_pause_is_idempotent() {
    let (_env, client, admin, _token) = setup_test();

    // A benign double call is a no-op success, not an error.
    client.pause(&admin);
    client.pause(&admin);
    assert!(client.is_paused());

    client.unpause(&admin);
    client.unpause(&admin);
    assert!(!client.is_paused());
}

#[test]
fn test_pause_by_non_admin_fails() {
    let (env, client, admin, _token) = setup_test();

    let intruder = Address::generate(&env);
    let res = client.try_pause(&intruder);
    match res {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(!client.is_paused());

    client.pause(&admin);
    let res = client.try_unpause(&intruder);
    match res {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(client.is_paused());
}
