//! Charge result assembly.
//!
//! Collects the per-component amounts into the final [`ChargeResult`] and
//! clamps the total so it never goes negative.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{ChargeResult, Stay};
use crate::money;

/// Accumulated component amounts and annotations for one calculation.
///
/// The grace path uses the all-zero default with only the flags, warning
/// and trace filled in.
#[derive(Debug, Clone, Default)]
pub struct ChargeBreakdown {
    /// Optimized base cost before discounts.
    pub base_cost: Decimal,
    /// Discount taken off the base cost.
    pub discount_amount: Decimal,
    /// Reservation overtime charge.
    pub overtime_amount: Decimal,
    /// Display name of the tariff used, when one was resolved.
    pub tariff_used: Option<String>,
    /// Display name of the subscription plan applied, if any.
    pub plan_used: Option<String>,
    /// Whether the stay had a linked reservation.
    pub has_reservation: bool,
    /// Whether the stay exceeded its reservation window.
    pub exceeded_reservation: bool,
    /// Whether the grace period short-circuited the calculation.
    pub within_grace_period: bool,
    /// Human-readable discount descriptions.
    pub applied_discounts: Vec<String>,
    /// Warnings attached to the result.
    pub warnings: Vec<String>,
    /// Multi-line calculation trace.
    pub calculation_details: String,
}

/// Total due for a breakdown: `base − discount + overtime`, floored at zero.
///
/// The result is rounded to the monetary scale, so the zero floor carries
/// two fractional digits like every other amount.
pub fn total_due(base_cost: Decimal, discount_amount: Decimal, overtime_amount: Decimal) -> Decimal {
    money::round_money((base_cost - discount_amount + overtime_amount).max(Decimal::ZERO))
}

/// Builds the final result for a stay from its accumulated breakdown.
///
/// Every monetary field passes through [`money::round_money`] on the way
/// out, so amounts from skipped steps (a stay without a plan or a
/// reservation, the grace path) still carry the two-digit scale when
/// serialized.
pub fn assemble_result(
    stay: &Stay,
    exit_time: NaiveDateTime,
    breakdown: ChargeBreakdown,
) -> ChargeResult {
    let duration_minutes = (exit_time - stay.entry_time).num_minutes();
    let total_cost = total_due(
        breakdown.base_cost,
        breakdown.discount_amount,
        breakdown.overtime_amount,
    );

    ChargeResult {
        stay_id: stay.id,
        user_id: stay.user_id,
        vehicle_id: stay.vehicle_id,
        parking_lot_id: stay.parking_lot_id,
        entry_time: stay.entry_time,
        exit_time,
        duration_minutes,
        base_cost: money::round_money(breakdown.base_cost),
        discount_amount: money::round_money(breakdown.discount_amount),
        overtime_amount: money::round_money(breakdown.overtime_amount),
        total_cost,
        tariff_used: breakdown.tariff_used,
        plan_used: breakdown.plan_used,
        has_reservation: breakdown.has_reservation,
        exceeded_reservation: breakdown.exceeded_reservation,
        within_grace_period: breakdown.within_grace_period,
        applied_discounts: breakdown.applied_discounts,
        warnings: breakdown.warnings,
        calculation_details: breakdown.calculation_details,
    }
}
