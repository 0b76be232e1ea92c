//! Calculation logic for the parking charge engine.
//!
//! This module contains all the calculation functions for pricing a stay,
//! including the grace-period gate, tariff resolution, base-cost
//! optimization across tariff tiers, subscription plan discounts,
//! reservation overtime assessment and final result assembly.

mod assembly;
mod base_cost;
mod grace_period;
mod overtime;
mod plan_discount;
mod tariff_selection;

pub use assembly::{ChargeBreakdown, assemble_result, total_due};
pub use base_cost::{
    MINUTES_PER_DAY, MINUTES_PER_MONTH, MINUTES_PER_WEEK, billable_minutes, calculate_base_cost,
};
pub use grace_period::{
    DEFAULT_GRACE_PERIOD_MINUTES, GRACE_PERIOD_TRACE, GRACE_PERIOD_WARNING, is_within_grace_period,
};
pub use overtime::{DEFAULT_OVERTIME_MULTIPLIER, OvertimeAssessment, assess_overtime};
pub use plan_discount::{calculate_plan_discount, discount_description};
pub use tariff_selection::resolve_tariff;
