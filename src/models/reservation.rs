//! Reservation model.
//!
//! A reservation blocks a time window at a parking lot. Only confirmed
//! reservations affect pricing: exits past the window's effective end incur
//! overtime charges.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default reservation window in hours when neither an end instant nor an
/// estimated duration is given.
pub const DEFAULT_RESERVATION_WINDOW_HOURS: i64 = 24;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Created but not yet confirmed.
    Pending,
    /// Confirmed and counting towards pricing.
    Confirmed,
    /// Canceled before use.
    Canceled,
    /// The vehicle never arrived.
    NoShow,
    /// The reservation was used and closed.
    Completed,
}

/// A reserved time window at a parking lot.
///
/// The window's end is derived: an explicit end instant wins, else the start
/// plus the estimated duration, else the start plus a 24-hour default.
///
/// # Example
///
/// ```
/// use parking_charge_engine::models::{Reservation, ReservationStatus};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 10)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// let reservation = Reservation {
///     id: Uuid::new_v4(),
///     user_id: Uuid::new_v4(),
///     vehicle_id: Uuid::new_v4(),
///     parking_lot_id: Uuid::new_v4(),
///     start_time: start,
///     end_time: None,
///     estimated_duration_minutes: Some(120),
///     status: ReservationStatus::Confirmed,
/// };
/// assert_eq!(
///     reservation.effective_end_time(),
///     start + chrono::Duration::minutes(120)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique identifier of the reservation.
    pub id: Uuid,
    /// The user who reserved.
    pub user_id: Uuid,
    /// The vehicle the reservation is for.
    pub vehicle_id: Uuid,
    /// The parking lot reserved.
    pub parking_lot_id: Uuid,
    /// Start of the reserved window.
    pub start_time: NaiveDateTime,
    /// Optional explicit end of the reserved window.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    /// Optional estimated duration in minutes, used when no end is given.
    #[serde(default)]
    pub estimated_duration_minutes: Option<i64>,
    /// Lifecycle status.
    pub status: ReservationStatus,
}

impl Reservation {
    /// Returns the effective end of the reserved window.
    ///
    /// Precedence: explicit end instant, then start plus estimated duration,
    /// then start plus [`DEFAULT_RESERVATION_WINDOW_HOURS`].
    pub fn effective_end_time(&self) -> NaiveDateTime {
        if let Some(end_time) = self.end_time {
            return end_time;
        }
        if let Some(minutes) = self.estimated_duration_minutes {
            return self.start_time + Duration::minutes(minutes);
        }
        self.start_time + Duration::hours(DEFAULT_RESERVATION_WINDOW_HOURS)
    }

    /// Returns true when the reservation has been confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }

    /// Returns true when the reservation is confirmed and its window
    /// contains the given instant.
    pub fn is_active_at(&self, at_time: NaiveDateTime) -> bool {
        self.is_confirmed() && self.start_time <= at_time && at_time <= self.effective_end_time()
    }
}
