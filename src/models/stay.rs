//! Parking stay model.
//!
//! A [`Stay`] is the fully-resolved input to a charge calculation: flat
//! identifier references plus any pre-fetched tariff, reservation and
//! subscription data. The engine never follows entity references beyond
//! what the stay carries and what the lookup traits provide.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reservation::Reservation;
use super::subscription::SubscriptionUsage;
use super::tariff::Tariff;

/// A parking stay, open or closed.
///
/// # Example
///
/// ```
/// use parking_charge_engine::models::Stay;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let entry = NaiveDate::from_ymd_opt(2025, 3, 10)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let stay = Stay {
///     id: Some(Uuid::new_v4()),
///     user_id: Uuid::new_v4(),
///     vehicle_id: Uuid::new_v4(),
///     parking_lot_id: Uuid::new_v4(),
///     vehicle_class_id: Uuid::new_v4(),
///     entry_time: entry,
///     exit_time: Some(entry + chrono::Duration::minutes(120)),
///     tariff: None,
///     reservation: None,
///     subscription: None,
/// };
/// assert_eq!(stay.duration_minutes(), Some(120));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    /// Identifier of the persisted stay, or `None` for ad-hoc calculations.
    pub id: Option<Uuid>,
    /// The user who parked.
    pub user_id: Uuid,
    /// The vehicle that parked.
    pub vehicle_id: Uuid,
    /// The parking lot used.
    pub parking_lot_id: Uuid,
    /// The vehicle's class, used for tariff resolution.
    pub vehicle_class_id: Uuid,
    /// Entry instant.
    pub entry_time: NaiveDateTime,
    /// Exit instant, `None` while the stay is still open.
    pub exit_time: Option<NaiveDateTime>,
    /// Pre-assigned tariff, taking precedence over lookup.
    #[serde(default)]
    pub tariff: Option<Tariff>,
    /// Linked reservation, if the stay was reserved.
    #[serde(default)]
    pub reservation: Option<Reservation>,
    /// Linked subscription record. Informational; the discount step always
    /// consults the lookup service for the entry date.
    #[serde(default)]
    pub subscription: Option<SubscriptionUsage>,
}

impl Stay {
    /// Returns the stay duration in whole minutes, or `None` while open.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.exit_time
            .map(|exit_time| (exit_time - self.entry_time).num_minutes())
    }
}
