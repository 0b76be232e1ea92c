//! Money arithmetic for the parking charge engine.
//!
//! All monetary amounts are [`Decimal`] values carrying two fractional
//! digits, rounded half-up (`MidpointAwayFromZero`). Every calculation
//! module routes its arithmetic through the helpers here so the scale and
//! rounding mode are applied in exactly one place.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounding strategy for monetary amounts.
///
/// Half-up rounding: a tie at the third fractional digit rounds away from
/// zero, so 2.345 becomes 2.35.
pub const MONEY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Minutes in one billable hour.
pub const MINUTES_PER_HOUR: i64 = 60;

/// Rounds an amount to the monetary scale.
///
/// Rounds half-up to [`MONEY_SCALE`] fractional digits, then rescales so the
/// result always carries exactly two digits (`10` renders as `10.00`).
///
/// # Example
///
/// ```
/// use parking_charge_engine::money::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_money(Decimal::from_str("2.345").unwrap());
/// assert_eq!(rounded.to_string(), "2.35");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, MONEY_ROUNDING);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Cost of a number of minutes at an hourly rate.
///
/// Computes `rate_per_hour × minutes / 60` and rounds the quotient to the
/// monetary scale.
pub fn hourly_cost(rate_per_hour: Decimal, minutes: i64) -> Decimal {
    round_money(rate_per_hour * Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR))
}

/// Percentage share of an amount.
///
/// Computes `amount × percentage / 100` and rounds the result to the
/// monetary scale.
pub fn percentage_of(amount: Decimal, percentage: Decimal) -> Decimal {
    round_money(amount * percentage / Decimal::from(100))
}
