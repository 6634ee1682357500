use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage key constants ───────────────────────────────────────────────────

/// Counter for issuing monotonic, account-independent position IDs.
const POS_CTR: Symbol = symbol_short!("POS_CTR");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ───────────────────────────────────────────────────────────────────

/// Lifecycle of a stake position. `Open → Closed` exactly once, never back.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionStatus {
    Open,
    Closed,
}

/// One stake action's record.
///
/// Everything except `status` and `closed_at` is written once at creation
/// and never mutated. Closed positions are kept in storage indefinitely so
/// the full staking history stays queryable.
///
/// Fields are only ever appended to this type across contract versions.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    /// Auto-incremented unique identifier, shared across all accounts.
    pub id: u64,
    /// The address that opened the position. Immutable.
    pub owner: Address,
    /// Token amount locked. Always positive.
    pub principal: i128,
    /// Requested lock duration in seconds. Reward accrual stops here.
    pub period: u64,
    /// Ledger timestamp at creation.
    pub opened_at: u64,
    /// The global reward rate captured when the position was opened.
    pub rate_at_open: i128,
    pub status: PositionStatus,
    /// Ledger timestamp of closure; `0` while the position is open.
    pub closed_at: u64,
}

// ── Storage helpers ─────────────────────────────────────────────────────────

fn position_key(id: u64) -> (Symbol, u64) {
    (symbol_short!("POS"), id)
}

fn extend_ttl(env: &Env, key: &(Symbol, u64)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Persist a `StakePosition`.
pub fn store_position(env: &Env, position: &StakePosition) {
    let key = position_key(position.id);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}

/// Retrieve a `StakePosition` by ID, returning `None` when not found.
pub fn get_position(env: &Env, id: u64) -> Option<StakePosition> {
    let key = position_key(id);
    let position: Option<StakePosition> = env.storage().persistent().get(&key);
    if position.is_some() {
        extend_ttl(env, &key);
    }
    position
}

/// Allocate and return the next position ID (1-based, monotonically
/// increasing, never reused).
pub fn next_position_id(env: &Env) -> u64 {
    let current: u64 = env.storage().instance().get(&POS_CTR).unwrap_or(0u64);
    let next = current.saturating_add(1);
    env.storage().instance().set(&POS_CTR, &next);
    next
}

/// Number of positions ever opened, closed ones included.
pub fn position_count(env: &Env) -> u64 {
    env.storage().instance().get(&POS_CTR).unwrap_or(0u64)
}
