use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage keys ─────────────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const PAUSED: Symbol = symbol_short!("PAUSED");

// ── Administrator identity ───────────────────────────────────────────────────

/// Records the administrator during contract initialization.
///
/// Only callable internally — contracts must ensure this runs exactly once,
/// inside their initializer.
pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// Returns the administrator address, if one has been set.
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

/// Guard: returns `true` iff `who` is the stored administrator.
///
/// Returns `false` when no administrator has been set, so uninitialized
/// contracts reject gated calls instead of accepting them.
pub fn is_admin(env: &Env, who: &Address) -> bool {
    match get_admin(env) {
        Some(admin) => admin == *who,
        None => false,
    }
}

/// Reassigns the administrator. Authorization must be verified by the caller.
pub fn transfer_admin(env: &Env, new_admin: &Address) {
    env.storage().instance().set(&ADMIN, new_admin);
}

// ── Pause flag ───────────────────────────────────────────────────────────────

/// Returns `true` while state-mutating operations are halted.
pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Sets or clears the pause flag.
///
/// Returns `true` when the flag actually changed, `false` for an idempotent
/// repeat call. Callers emit transition events only on `true`.
pub fn set_paused(env: &Env, paused: bool) -> bool {
    if is_paused(env) == paused {
        return false;
    }
    env.storage().instance().set(&PAUSED, &paused);
    true
}
