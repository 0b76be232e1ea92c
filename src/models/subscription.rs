//! Subscription plan usage model.
//!
//! A [`SubscriptionUsage`] records that a user holds a discount plan for a
//! vehicle at a parking lot, together with the plan's validity window and
//! usage counters. The engine only reads the discount percentage and the
//! validity window; the usage caps are data for the surrounding system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Currently usable.
    Active,
    /// Past its validity window.
    Expired,
    /// Terminated before expiry.
    Canceled,
}

/// An active plan held by a user for a vehicle at a parking lot.
///
/// The plan definition's relevant fields (name, discount percentage, caps)
/// are flattened into this record so the engine never follows references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionUsage {
    /// Unique identifier of the usage record.
    pub id: Uuid,
    /// The user holding the plan.
    pub user_id: Uuid,
    /// The vehicle covered by the plan.
    pub vehicle_id: Uuid,
    /// The parking lot the plan applies to.
    pub parking_lot_id: Uuid,
    /// Display name of the plan, e.g. "Monthly Plan".
    pub plan_name: String,
    /// Discount taken off the base cost, as a percentage between 0 and 100.
    pub discount_percentage: Decimal,
    /// First day of the validity window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the validity window (inclusive).
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: SubscriptionStatus,
    /// Entries consumed so far.
    #[serde(default)]
    pub entries_used: u32,
    /// Hours consumed so far.
    #[serde(default)]
    pub hours_used: u32,
    /// Optional cap on entries.
    #[serde(default)]
    pub max_entries: Option<u32>,
    /// Optional cap on hours.
    #[serde(default)]
    pub max_hours: Option<u32>,
}

impl SubscriptionUsage {
    /// Returns true when the subscription is active and its validity window
    /// contains the given date.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.status == SubscriptionStatus::Active
            && self.start_date <= date
            && date <= self.end_date
    }

    /// Returns true while the entry cap has not been reached.
    ///
    /// Uncapped plans always have entries remaining.
    pub fn has_entries_remaining(&self) -> bool {
        self.max_entries.map_or(true, |max| self.entries_used < max)
    }

    /// Returns true while the hour cap has not been reached.
    ///
    /// Uncapped plans always have hours remaining.
    pub fn has_hours_remaining(&self) -> bool {
        self.max_hours.map_or(true, |max| self.hours_used < max)
    }
}
