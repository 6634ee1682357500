use soroban_sdk::{symbol_short, Env, Symbol};

const REWARD_RATE: Symbol = symbol_short!("RWD_RATE");

/// Current global reward rate, in basis points per second (see [`crate::accrual`]).
pub fn current(env: &Env) -> i128 {
    env.storage().instance().get(&REWARD_RATE).unwrap_or(0)
}

/// Overwrites the global rate. Validation and authorization are the
/// caller's responsibility.
pub fn set(env: &Env, rate: i128) {
    env.storage().instance().set(&REWARD_RATE, &rate);
}

/// Resolves the rate a position accrues at.
///
/// With snapshot semantics the rate captured at open governs the position
/// for its whole life; otherwise the live global rate applies. The ledger
/// never branches on the mode anywhere else, so swapping the deployment's
/// choice touches only this function's input.
pub fn applicable(env: &Env, snapshot: bool, rate_at_open: i128) -> i128 {
    if snapshot {
        rate_at_open
    } else {
        current(env)
    }
}
