#![no_std]

pub mod accrual;
pub mod custody;
pub mod events;
pub mod position;
pub mod rate;

use common::access;
use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, BytesN, Env, Symbol,
};

use position::{PositionStatus, StakePosition};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const CONFIG: Symbol = symbol_short!("CONFIG");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InvalidInput = 5,
    PositionNotFound = 6,
    Paused = 7,
    TimelockNotExpired = 8,
    InsufficientCustodyBalance = 9,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Deploy-time configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    /// Token contract whose balances the ledger holds in custody.
    pub token: Address,
    /// `true`: positions accrue at the rate captured when they were opened.
    /// `false`: positions accrue at the live global rate.
    pub snapshot_rate: bool,
    /// `true`: positions may close before their lock period matures, with
    /// pro-rata reward. `false`: early closes fail `TimelockNotExpired`.
    pub allow_early_unstake: bool,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract. Replaces a constructor, so it is callable
    /// exactly once; a second call fails `AlreadyInitialized`.
    ///
    /// * `token`               – address of the token users stake.
    /// * `snapshot_rate`       – rate-retroactivity policy, see [`StakingConfig`].
    /// * `allow_early_unstake` – lock-enforcement policy, see [`StakingConfig`].
    /// * `initial_rate`        – reward rate in basis points per second.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        snapshot_rate: bool,
        allow_early_unstake: bool,
        initial_rate: i128,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if initial_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(
            &CONFIG,
            &StakingConfig {
                token: token.clone(),
                snapshot_rate,
                allow_early_unstake,
            },
        );
        access::set_admin(&env, &admin);
        rate::set(&env, initial_rate);
        // TOTAL_STAKED and the position counter start at zero; unwrap_or(0)
        // handles absent keys, so no explicit init needed.

        events::publish_initialized(
            &env,
            admin,
            token,
            initial_rate,
            snapshot_rate,
            allow_early_unstake,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` tokens for `period` seconds and open a new position.
    ///
    /// Tokens move from the staker into contract custody before the position
    /// record is written; a failed pull leaves no trace of the call.
    pub fn stake(
        env: Env,
        staker: Address,
        amount: i128,
        period: u64,
    ) -> Result<u64, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::require_not_paused(&env)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let config = Self::load_config(&env)?;
        custody::pull(&env, &config.token, &staker, amount);

        let id = position::next_position_id(&env);
        let now = env.ledger().timestamp();
        position::store_position(
            &env,
            &StakePosition {
                id,
                owner: staker.clone(),
                principal: amount,
                period,
                opened_at: now,
                rate_at_open: rate::current(&env),
                status: PositionStatus::Open,
                closed_at: 0,
            },
        );

        let prev_total: i128 = env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0);
        let new_total = prev_total.saturating_add(amount);
        env.storage().instance().set(&TOTAL_STAKED, &new_total);

        events::publish_staked(&env, staker, id, amount, period, new_total);

        Ok(id)
    }

    /// Close a position and pay out its principal plus accrued reward.
    ///
    /// The position flips to `Closed` before the outbound transfer so a
    /// reentrant token implementation cannot draw the payout twice; the
    /// custody-balance check runs before the flip so a shortfall leaves the
    /// position untouched and open.
    pub fn unstake(env: Env, staker: Address, position_id: u64) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        Self::require_not_paused(&env)?;

        let config = Self::load_config(&env)?;
        let mut pos =
            position::get_position(&env, position_id).ok_or(ContractError::PositionNotFound)?;

        // Foreign and already-closed ids are indistinguishable from unknown
        // ones: the caller learns nothing about other accounts' positions.
        if pos.owner != staker || pos.status == PositionStatus::Closed {
            return Err(ContractError::PositionNotFound);
        }

        let now = env.ledger().timestamp();
        if !config.allow_early_unstake && now < pos.opened_at.saturating_add(pos.period) {
            return Err(ContractError::TimelockNotExpired);
        }

        let payout = Self::accrued_payout(&env, &config, &pos);
        if custody::balance(&env, &config.token) < payout {
            return Err(ContractError::InsufficientCustodyBalance);
        }

        // Mark closed before transferring (checks-effects-interactions).
        pos.status = PositionStatus::Closed;
        pos.closed_at = now;
        position::store_position(&env, &pos);

        let prev_total: i128 = env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0);
        env.storage()
            .instance()
            .set(&TOTAL_STAKED, &prev_total.saturating_sub(pos.principal));

        custody::payout(&env, &config.token, &staker, payout)?;

        events::publish_unstaked(&env, staker, position_id, payout);

        Ok(payout)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Principal plus reward accrued so far on `position_id`.
    ///
    /// Never paused-gated and never mutates. For closed positions the view
    /// reports the realized payout: accrual froze at `closed_at`.
    pub fn claimable_amount(
        env: Env,
        position_id: u64,
        owner: Address,
    ) -> Result<i128, ContractError> {
        let config = Self::load_config(&env)?;
        let pos =
            position::get_position(&env, position_id).ok_or(ContractError::PositionNotFound)?;
        if pos.owner != owner {
            return Err(ContractError::PositionNotFound);
        }
        Ok(Self::accrued_payout(&env, &config, &pos))
    }

    /// Return a position's full record. Closed positions stay queryable
    /// indefinitely as an audit trail.
    pub fn get_position(env: Env, position_id: u64) -> Result<StakePosition, ContractError> {
        position::get_position(&env, position_id).ok_or(ContractError::PositionNotFound)
    }

    /// Number of positions ever opened.
    pub fn get_position_count(env: Env) -> u64 {
        position::position_count(&env)
    }

    /// Sum of principal over all open positions.
    pub fn get_total_staked(env: Env) -> i128 {
        env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
    }

    /// Current global reward rate (basis points per second).
    pub fn get_reward_rate(env: Env) -> i128 {
        rate::current(&env)
    }

    pub fn get_config(env: Env) -> Result<StakingConfig, ContractError> {
        Self::load_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn is_paused(env: Env) -> bool {
        access::is_paused(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        access::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Update the reward rate.
    ///
    /// Positions opened under snapshot-rate deployments keep accruing at
    /// their recorded rate; only positions opened afterwards see the change.
    pub fn set_reward_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if new_rate < 0 {
            return Err(ContractError::InvalidInput);
        }

        rate::set(&env, new_rate);

        events::publish_reward_rate_set(&env, new_rate);

        Ok(())
    }

    /// Halt all state-mutating operations. Re-pausing while already paused
    /// is a no-op success, not an error.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if access::set_paused(&env, true) {
            events::publish_paused(&env, caller);
        }

        Ok(())
    }

    /// Resume state-mutating operations. Idempotent like `pause`.
    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if access::set_paused(&env, false) {
            events::publish_unpaused(&env, caller);
        }

        Ok(())
    }

    /// Hand the administrator role to `new_admin`. Only the current admin
    /// may call this.
    pub fn transfer_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current_admin.require_auth();
        Self::require_admin(&env, &current_admin)?;

        access::transfer_admin(&env, &new_admin);

        events::publish_admin_transferred(&env, current_admin, new_admin);

        Ok(())
    }

    /// Swap the contract's executable. Position storage is keyed per datum
    /// and only ever extended, so existing records survive the upgrade.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the administrator.
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !access::is_admin(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    /// Guard: revert while the pause flag is set.
    fn require_not_paused(env: &Env) -> Result<(), ContractError> {
        if access::is_paused(env) {
            return Err(ContractError::Paused);
        }
        Ok(())
    }

    fn load_config(env: &Env) -> Result<StakingConfig, ContractError> {
        env.storage()
            .instance()
            .get(&CONFIG)
            .ok_or(ContractError::NotInitialized)
    }

    /// Principal plus accrual for `pos` at the current instant. Accrual runs
    /// to `closed_at` for closed positions and to `now` for open ones, and
    /// never past the lock period either way.
    fn accrued_payout(env: &Env, config: &StakingConfig, pos: &StakePosition) -> i128 {
        let until = match pos.status {
            PositionStatus::Open => env.ledger().timestamp(),
            PositionStatus::Closed => pos.closed_at,
        };
        let elapsed = until.saturating_sub(pos.opened_at);
        let rate = rate::applicable(env, config.snapshot_rate, pos.rate_at_open);
        accrual::payout(pos.principal, elapsed, pos.period, rate)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_pause;
