#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the staking contract.
//!
//! Invariants tested:
//! - Position IDs are always monotonically increasing (1, 2, 3…) across
//!   accounts
//! - Immediately after opening, a position's claim equals its principal
//! - Unstaking never returns less than the principal
//! - Across arbitrary operation sequences, the sum of open principal never
//!   exceeds the tokens the contract actually holds

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{Address, Env};
use staking::{StakingContract, StakingContractClient};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup(initial_rate: i128) -> (Env, StakingContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let token_id = token.address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &token_id, &true, &true, &initial_rate);

    (env, client, admin, token_id)
}

fn mint(env: &Env, token: &Address, recipient: &Address, amount: i128) {
    StellarAssetClient::new(env, token)
        .mock_all_auths()
        .mint(recipient, &amount);
}

/// One step of the randomized operation sequence.
#[derive(Clone, Debug, Arbitrary)]
enum Action {
    Stake { amount: u16, period: u8 },
    Unstake { seed: u8 },
    SetRate { rate: u16 },
    Advance { dt: u16 },
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// For any number of stakes (1–8) from alternating accounts, the
    /// returned IDs must be 1, 2, …, N.
    #[test]
    fn prop_position_ids_monotonic(n_stakes in 1u64..=8u64) {
        let (env, client, _admin, token) = setup(100);

        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        mint(&env, &token, &alice, 1_000_000);
        mint(&env, &token, &bob, 1_000_000);

        for expected_id in 1..=n_stakes {
            let staker = if expected_id % 2 == 0 { &bob } else { &alice };
            let id = client.stake(staker, &1_000, &100);
            prop_assert_eq!(id, expected_id);
        }
        prop_assert_eq!(client.get_position_count(), n_stakes);
    }

    /// With no elapsed time, the claim on a fresh position is exactly its
    /// principal, whatever the rate.
    #[test]
    fn prop_claimable_equals_principal_at_open(
        amount in 1i128..=1_000_000_000,
        rate in 0i128..=10_000,
    ) {
        let (env, client, _admin, token) = setup(rate);

        let staker = Address::generate(&env);
        mint(&env, &token, &staker, amount);

        env.ledger().set_timestamp(0);
        let id = client.stake(&staker, &amount, &100);
        prop_assert_eq!(client.claimable_amount(&id, &staker), amount);
    }

    /// Whenever it succeeds, unstaking returns at least the principal and
    /// exactly what `claimable_amount` promised at that instant.
    #[test]
    fn prop_unstake_matches_claimable(
        amount in 1i128..=1_000_000,
        rate in 0i128..=1_000,
        period in 0u64..=1_000,
        dt in 0u64..=2_000,
    ) {
        let (env, client, _admin, token) = setup(rate);

        let staker = Address::generate(&env);
        mint(&env, &token, &staker, amount);
        // Generous reward funding so the payout never hits the custody check.
        mint(&env, &token, &client.address, 1_000_000_000_000);

        env.ledger().set_timestamp(0);
        let id = client.stake(&staker, &amount, &period);

        env.ledger().set_timestamp(dt);
        let promised = client.claimable_amount(&id, &staker);
        let payout = client.unstake(&staker, &id);

        prop_assert_eq!(payout, promised);
        prop_assert!(payout >= amount);
    }

    /// Across arbitrary stake/unstake/rate/advance sequences, the tracked
    /// open principal never exceeds the contract's actual token holdings.
    #[test]
    fn prop_open_principal_never_exceeds_custody(
        actions in proptest::collection::vec(any::<Action>(), 0..24)
    ) {
        let (env, client, admin, token) = setup(50);

        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        mint(&env, &token, &alice, 100_000_000);
        mint(&env, &token, &bob, 100_000_000);
        mint(&env, &token, &client.address, 1_000_000_000);

        let mut now: u64 = 0;
        env.ledger().set_timestamp(now);

        for (i, action) in actions.into_iter().enumerate() {
            let staker = if i % 2 == 0 { &alice } else { &bob };
            match action {
                Action::Stake { amount, period } => {
                    let _ = client.try_stake(staker, &(amount as i128), &(period as u64));
                }
                Action::Unstake { seed } => {
                    let count = client.get_position_count();
                    if count > 0 {
                        let id = (seed as u64 % count) + 1;
                        let _ = client.try_unstake(staker, &id);
                    }
                }
                Action::SetRate { rate } => {
                    let _ = client.try_set_reward_rate(&admin, &(rate as i128));
                }
                Action::Advance { dt } => {
                    now += dt as u64;
                    env.ledger().set_timestamp(now);
                }
            }

            let held = TokenClient::new(&env, &token).balance(&client.address);
            prop_assert!(
                client.get_total_staked() <= held,
                "open principal {} exceeds custody {}",
                client.get_total_staked(),
                held
            );
        }
    }
}
