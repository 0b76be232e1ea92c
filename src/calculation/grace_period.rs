//! Grace period gate.
//!
//! Very short stays are free. When the gate fires the engine short-circuits
//! the whole pipeline: no tariff is resolved and every monetary field in the
//! result is zero.

use chrono::NaiveDateTime;

/// Default grace period in minutes.
pub const DEFAULT_GRACE_PERIOD_MINUTES: i64 = 30;

/// Warning attached to results that fall inside the grace period.
pub const GRACE_PERIOD_WARNING: &str = "Within grace period - no charges apply";

/// Trace text recorded when the grace period short-circuits a calculation.
pub const GRACE_PERIOD_TRACE: &str = "Grace period applied";

/// Returns true when the stay falls inside the grace period.
///
/// The stay duration is truncated to whole minutes and compared inclusively,
/// so with a 30-minute grace a stay of exactly 30 minutes is still free.
pub fn is_within_grace_period(
    entry_time: NaiveDateTime,
    exit_time: NaiveDateTime,
    grace_minutes: i64,
) -> bool {
    (exit_time - entry_time).num_minutes() <= grace_minutes
}
