//! Tariff model.
//!
//! A tariff prices stays for one parking lot and vehicle class. Besides the
//! mandatory hourly rate it may offer daily, weekly and monthly tiers that
//! the base-cost optimizer uses for long stays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default minimum billable time in minutes when a tariff omits one.
pub const DEFAULT_MINIMUM_TIME_MINUTES: i64 = 60;

/// A pricing tariff for one parking lot and vehicle class.
///
/// Stays shorter than `minimum_time_minutes` are billed as if they lasted
/// the minimum. The optional tier rates only come into play when the
/// billable duration reaches the tier length.
///
/// # Example
///
/// ```
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
/// assert!(tariff.rate_per_hour > Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Unique identifier of the tariff.
    pub id: Uuid,
    /// The parking lot this tariff applies to.
    pub parking_lot_id: Uuid,
    /// The vehicle class this tariff applies to.
    pub vehicle_class_id: Uuid,
    /// Display name, e.g. "Standard Rate".
    pub name: String,
    /// Price per hour. Always present and expected to be positive.
    pub rate_per_hour: Decimal,
    /// Optional price per day (1440 minutes).
    #[serde(default)]
    pub rate_per_day: Option<Decimal>,
    /// Optional price per week (10080 minutes).
    #[serde(default)]
    pub rate_per_week: Option<Decimal>,
    /// Optional price per month (43200 minutes).
    #[serde(default)]
    pub rate_per_month: Option<Decimal>,
    /// Minimum billable time in minutes.
    #[serde(default = "default_minimum_time")]
    pub minimum_time_minutes: i64,
}

fn default_minimum_time() -> i64 {
    DEFAULT_MINIMUM_TIME_MINUTES
}
