//! Charge calculation result model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The itemized outcome of pricing a stay.
///
/// Carries every amount that went into the total, the names of the tariff
/// and plan that were applied, outcome flags, human-readable discount
/// descriptions and warnings, and a multi-line calculation trace.
///
/// Results are plain values: the same stay priced twice yields two equal
/// `ChargeResult`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeResult {
    /// Identifier of the priced stay, when it was a persisted one.
    pub stay_id: Option<Uuid>,
    /// The user who parked.
    pub user_id: Uuid,
    /// The vehicle that parked.
    pub vehicle_id: Uuid,
    /// The parking lot used.
    pub parking_lot_id: Uuid,
    /// Entry instant.
    pub entry_time: NaiveDateTime,
    /// Exit instant used for the calculation.
    pub exit_time: NaiveDateTime,
    /// Stay duration in whole minutes.
    pub duration_minutes: i64,
    /// Optimized base cost before discounts.
    pub base_cost: Decimal,
    /// Discount taken off the base cost.
    pub discount_amount: Decimal,
    /// Reservation overtime charge.
    pub overtime_amount: Decimal,
    /// Amount due: base minus discount plus overtime, never negative.
    pub total_cost: Decimal,
    /// Display name of the tariff used, when one was resolved.
    pub tariff_used: Option<String>,
    /// Display name of the subscription plan applied, if any.
    pub plan_used: Option<String>,
    /// Whether the stay had a linked reservation.
    pub has_reservation: bool,
    /// Whether the stay exceeded its reservation window.
    pub exceeded_reservation: bool,
    /// Whether the grace period made the stay free.
    pub within_grace_period: bool,
    /// Human-readable descriptions of applied discounts.
    pub applied_discounts: Vec<String>,
    /// Warnings attached to the result.
    pub warnings: Vec<String>,
    /// Multi-line calculation trace.
    pub calculation_details: String,
}
