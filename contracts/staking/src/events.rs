#![allow(deprecated)] // events().publish pending migration to #[contractevent]

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
    pub reward_rate: i128,
    pub snapshot_rate: bool,
    pub allow_early_unstake: bool,
    pub timestamp: u64,
}

/// Fired when a position is opened.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub owner: Address,
    pub position_id: u64,
    pub amount: i128,
    pub period: u64,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a position is closed and paid out.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub owner: Address,
    pub position_id: u64,
    pub payout: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the reward rate.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub new_rate: i128,
    pub timestamp: u64,
}

/// Fired when the admin halts state-mutating operations.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when the admin resumes state-mutating operations.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnpausedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Fired when the administrator role moves to a new address.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferredEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    token: Address,
    reward_rate: i128,
    snapshot_rate: bool,
    allow_early_unstake: bool,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            token,
            reward_rate,
            snapshot_rate,
            allow_early_unstake,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    owner: Address,
    position_id: u64,
    amount: i128,
    period: u64,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), owner.clone()),
        StakedEvent {
            owner,
            position_id,
            amount,
            period,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(env: &Env, owner: Address, position_id: u64, payout: i128) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), owner.clone()),
        UnstakedEvent {
            owner,
            position_id,
            payout,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardRateSetEvent {
            new_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        PausedEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unpaused(env: &Env, admin: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"),),
        UnpausedEvent {
            admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transferred(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_XFER"), new_admin.clone()),
        AdminTransferredEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}
