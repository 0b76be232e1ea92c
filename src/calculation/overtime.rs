//! Reservation overtime assessment.
//!
//! A confirmed reservation defines a time window. Exiting past the window's
//! effective end bills the excess minutes at the hourly rate with a penalty
//! multiplier on top. Reservations in any other status never charge.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::{Reservation, Tariff};
use crate::money;

/// Default penalty multiplier applied to overtime minutes.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The outcome of assessing a stay against its reservation window.
#[derive(Debug, Clone, PartialEq)]
pub struct OvertimeAssessment {
    /// Penalty charge for the overtime minutes.
    pub amount: Decimal,
    /// Whole minutes past the reservation's effective end.
    pub overtime_minutes: i64,
    /// Whether the exit exceeded the reservation window at all.
    pub exceeded: bool,
}

impl OvertimeAssessment {
    fn none() -> Self {
        OvertimeAssessment {
            amount: Decimal::ZERO,
            overtime_minutes: 0,
            exceeded: false,
        }
    }
}

/// Assesses reservation overtime for a stay.
///
/// Only reservations with status `Confirmed` are honored; a missing or
/// non-confirmed reservation yields a zero assessment. The hourly cost of
/// the overtime minutes is rounded to the monetary scale BEFORE the
/// multiplier is applied, and the product is rounded again (25 overtime
/// minutes at $5.00/h with a 1.5 multiplier charge $2.08 × 1.5 = $3.12,
/// not $3.13).
///
/// An exit past the effective end by less than a minute still raises the
/// exceeded flag; the charge is zero because whole minutes truncate.
pub fn assess_overtime(
    tariff: &Tariff,
    reservation: Option<&Reservation>,
    actual_exit: NaiveDateTime,
    multiplier: Decimal,
) -> OvertimeAssessment {
    let Some(reservation) = reservation else {
        return OvertimeAssessment::none();
    };
    if !reservation.is_confirmed() {
        return OvertimeAssessment::none();
    }

    let effective_end = reservation.effective_end_time();
    if actual_exit <= effective_end {
        return OvertimeAssessment::none();
    }

    let overtime_minutes = (actual_exit - effective_end).num_minutes();
    let amount =
        money::round_money(money::hourly_cost(tariff.rate_per_hour, overtime_minutes) * multiplier);

    OvertimeAssessment {
        amount,
        overtime_minutes,
        exceeded: true,
    }
}
