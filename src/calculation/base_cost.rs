//! Base cost optimization across tariff tiers.
//!
//! The billable duration is priced against every tier the tariff offers:
//! hourly always, plus daily, weekly and monthly tiers once the stay is long
//! enough for at least one whole tier unit. The cheapest candidate wins.
//!
//! Tier remainders are always billed at the hourly rate. A weekly candidate
//! with three leftover days prices those days hourly, not daily; remainders
//! never re-enter the tier optimization.

use rust_decimal::Decimal;

use crate::models::Tariff;
use crate::money;

/// Minutes in one billable day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Minutes in one billable week.
pub const MINUTES_PER_WEEK: i64 = 10_080;

/// Minutes in one billable month (30 days).
pub const MINUTES_PER_MONTH: i64 = 43_200;

/// Returns the minutes actually billed for a stay duration.
///
/// Durations below the tariff minimum are raised to the minimum.
pub fn billable_minutes(tariff: &Tariff, duration_minutes: i64) -> i64 {
    duration_minutes.max(tariff.minimum_time_minutes)
}

/// Calculates the cheapest base cost for a duration under a tariff.
///
/// # Example
///
/// ```
/// use parking_charge_engine::calculation::calculate_base_cost;
/// use parking_charge_engine::models::Tariff;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let tariff = Tariff {
///     id: Uuid::new_v4(),
///     parking_lot_id: Uuid::new_v4(),
///     vehicle_class_id: Uuid::new_v4(),
///     name: "Standard Rate".to_string(),
///     rate_per_hour: Decimal::from_str("5.00").unwrap(),
///     rate_per_day: Some(Decimal::from_str("20.00").unwrap()),
///     rate_per_week: None,
///     rate_per_month: None,
///     minimum_time_minutes: 60,
/// };
///
/// // Two hours bill hourly; 26 hours are cheaper as one day plus two hours.
/// assert_eq!(calculate_base_cost(&tariff, 120), Decimal::from_str("10.00").unwrap());
/// assert_eq!(calculate_base_cost(&tariff, 1560), Decimal::from_str("30.00").unwrap());
/// ```
pub fn calculate_base_cost(tariff: &Tariff, duration_minutes: i64) -> Decimal {
    let billable = billable_minutes(tariff, duration_minutes);
    let mut best = money::hourly_cost(tariff.rate_per_hour, billable);

    if let Some(rate_per_day) = tariff.rate_per_day {
        if billable >= MINUTES_PER_DAY {
            best = best.min(tier_candidate(tariff, rate_per_day, billable, MINUTES_PER_DAY));
        }
    }
    if let Some(rate_per_week) = tariff.rate_per_week {
        if billable >= MINUTES_PER_WEEK {
            best = best.min(tier_candidate(tariff, rate_per_week, billable, MINUTES_PER_WEEK));
        }
    }
    if let Some(rate_per_month) = tariff.rate_per_month {
        if billable >= MINUTES_PER_MONTH {
            best = best.min(tier_candidate(tariff, rate_per_month, billable, MINUTES_PER_MONTH));
        }
    }

    money::round_money(best)
}

/// Cost of whole tier units plus the hourly-billed remainder.
fn tier_candidate(tariff: &Tariff, tier_rate: Decimal, billable: i64, tier_minutes: i64) -> Decimal {
    let units = billable / tier_minutes;
    let remainder = billable % tier_minutes;
    tier_rate * Decimal::from(units) + remainder_cost(tariff, remainder)
}

/// Hourly cost of the minutes left over after whole tier units.
fn remainder_cost(tariff: &Tariff, remaining_minutes: i64) -> Decimal {
    if remaining_minutes == 0 {
        return Decimal::ZERO;
    }
    money::hourly_cost(tariff.rate_per_hour, remaining_minutes)
}
