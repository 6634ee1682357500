#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};
use staking::{StakingContract, StakingContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u64, period: u16 },
    Unstake { id: u8 },
    Claimable { id: u8 },
    SetRate { rate: u16 },
    Pause,
    Unpause,
    Advance { dt: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let token = env.register_stellar_asset_contract_v2(admin.clone());
    let token_id = token.address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let _ = client.try_initialize(&admin, &token_id, &true, &true, &1_000i128);

    let mut users = vec![admin.clone()];
    for _ in 0..5 {
        users.push(Address::generate(&env));
    }
    let sac = StellarAssetClient::new(&env, &token_id);
    for user in &users {
        sac.mint(user, &1_000_000_000i128);
    }
    // Reward headroom so payouts exercise the transfer path too.
    sac.mint(&contract_id, &1_000_000_000_000i128);

    // Call functions with arbitrary parameters to find unhandled panics
    // (e.g., overflow from missing math protection).
    let mut now: u64 = 0;
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount, period } => {
                let _ = client.try_stake(caller, &(amount as i128), &(period as u64));
            }
            FuzzAction::Unstake { id } => {
                let _ = client.try_unstake(caller, &(id as u64));
            }
            FuzzAction::Claimable { id } => {
                let _ = client.try_claimable_amount(&(id as u64), caller);
            }
            FuzzAction::SetRate { rate } => {
                let _ = client.try_set_reward_rate(&admin, &(rate as i128));
            }
            FuzzAction::Pause => {
                let _ = client.try_pause(&admin);
            }
            FuzzAction::Unpause => {
                let _ = client.try_unpause(&admin);
            }
            FuzzAction::Advance { dt } => {
                now = now.saturating_add(dt as u64);
                env.ledger().set_timestamp(now);
            }
        }
    }
});
