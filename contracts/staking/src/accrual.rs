//! Pure reward arithmetic.
//!
//! Everything here is side-effect free integer math so read paths can call
//! it any number of times without coordination.

/// Normalization constant for reward rates.
///
/// A rate is expressed in basis points of principal accrued per second of
/// effective lock time: `rate = 10_000` pays the full principal again after
/// one second inside the lock window.
pub const RATE_SCALE: i128 = 10_000;

/// Reward owed on `principal` after `elapsed` seconds at `rate`.
///
/// Accrual is simple (non-compounding) and proportional, and stops growing
/// once `elapsed` reaches `period`. Division truncates toward zero, so the
/// ledger never owes more than custody can fund; the remainder stays held.
pub fn reward(principal: i128, elapsed: u64, period: u64, rate: i128) -> i128 {
    let effective = elapsed.min(period) as i128;
    principal.saturating_mul(rate).saturating_mul(effective) / RATE_SCALE
}

/// Full payout for a position: principal plus accrued reward.
pub fn payout(principal: i128, elapsed: u64, period: u64, rate: i128) -> i128 {
    principal.saturating_add(reward(principal, elapsed, period, rate))
}
