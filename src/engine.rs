//! Charge calculation orchestration.
//!
//! [`ChargeEngine`] wires the calculation pipeline together: validate the
//! input, short-circuit inside the grace period, resolve the tariff,
//! optimize the base cost, apply the plan discount, assess reservation
//! overtime and assemble the final result. Failures abort the pipeline
//! before assembly; there are no partial results.

use chrono::{Duration, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::{
    ChargeBreakdown, GRACE_PERIOD_TRACE, GRACE_PERIOD_WARNING, assemble_result, assess_overtime,
    calculate_base_cost, calculate_plan_discount, discount_description, is_within_grace_period,
    resolve_tariff,
};
use crate::config::ChargePolicy;
use crate::error::{EngineError, EngineResult};
use crate::lookup::{ReservationLookup, SubscriptionLookup, TariffLookup};
use crate::models::{ChargeResult, Stay};

/// Parameters for an ad-hoc charge calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayParams {
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
    /// Exit instant.
    pub exit_time: NaiveDateTime,
}

/// Parameters for estimating charges before a stay ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateParams {
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
    /// Expected stay length in minutes. Must be positive.
    pub estimated_duration_minutes: i64,
}

/// The charge calculation engine.
///
/// Generic over the lookup provider `L`, which supplies tariffs,
/// subscriptions and reservations. The engine holds no mutable state;
/// every calculation is an independent, synchronous computation.
///
/// # Example
///
/// ```
/// use parking_charge_engine::engine::ChargeEngine;
/// use parking_charge_engine::lookup::InMemoryLookup;
/// use parking_charge_engine::models::{Stay, Tariff};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let parking_lot_id = Uuid::new_v4();
/// let vehicle_class_id = Uuid::new_v4();
///
/// let mut lookup = InMemoryLookup::new();
/// lookup.add_tariff(Tariff {
///     id: Uuid::new_v4(),
///     parking_lot_id,
///     vehicle_class_id,
///     name: "Standard Rate".to_string(),
///     rate_per_hour: Decimal::from_str("5.00").unwrap(),
///     rate_per_day: None,
///     rate_per_week: None,
///     rate_per_month: None,
///     minimum_time_minutes: 60,
/// });
/// let engine = ChargeEngine::new(lookup);
///
/// let entry = NaiveDate::from_ymd_opt(2025, 3, 10)
///     .unwrap()
///     .and_hms_opt(8, 0, 0)
///     .unwrap();
/// let stay = Stay {
///     id: None,
///     user_id: Uuid::new_v4(),
///     vehicle_id: Uuid::new_v4(),
///     parking_lot_id,
///     vehicle_class_id,
///     entry_time: entry,
///     exit_time: Some(entry + chrono::Duration::minutes(120)),
///     tariff: None,
///     reservation: None,
///     subscription: None,
/// };
///
/// let result = engine.calculate_for_stay(&stay).unwrap();
/// assert_eq!(result.total_cost, Decimal::from_str("10.00").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ChargeEngine<L> {
    lookup: L,
    policy: ChargePolicy,
}

impl<L> ChargeEngine<L>
where
    L: TariffLookup + SubscriptionLookup + ReservationLookup,
{
    /// Creates an engine with the default charging policy.
    pub fn new(lookup: L) -> Self {
        ChargeEngine {
            lookup,
            policy: ChargePolicy::default(),
        }
    }

    /// Creates an engine with an explicit charging policy.
    pub fn with_policy(lookup: L, policy: ChargePolicy) -> Self {
        ChargeEngine { lookup, policy }
    }

    /// Returns the active charging policy.
    pub fn policy(&self) -> &ChargePolicy {
        &self.policy
    }

    /// Calculates charges for a closed stay.
    ///
    /// # Errors
    ///
    /// Returns a Validation error when the stay has no exit yet or its exit
    /// precedes its entry, and a NotFound error when no tariff resolves for
    /// a stay outside the grace period.
    pub fn calculate_for_stay(&self, stay: &Stay) -> EngineResult<ChargeResult> {
        info!(stay_id = ?stay.id, user_id = %stay.user_id, "Calculating charges for stay");

        let Some(exit_time) = stay.exit_time else {
            return Err(EngineError::StayStillActive);
        };
        if exit_time < stay.entry_time {
            return Err(EngineError::ExitBeforeEntry {
                entry_time: stay.entry_time,
                exit_time,
            });
        }

        let result = self.charge(stay, exit_time)?;
        info!(
            total_cost = %result.total_cost,
            within_grace_period = result.within_grace_period,
            "Charge calculation complete"
        );
        Ok(result)
    }

    /// Calculates charges from ad-hoc parameters.
    ///
    /// Builds an unsaved stay from the parameters, attaching any confirmed
    /// reservation active at the entry instant, and prices it.
    ///
    /// # Errors
    ///
    /// Returns a Validation error when the exit precedes the entry or the
    /// entry lies in the future, and a NotFound error when no tariff
    /// resolves for a stay outside the grace period.
    pub fn calculate(&self, params: &StayParams) -> EngineResult<ChargeResult> {
        info!(
            user_id = %params.user_id,
            vehicle_id = %params.vehicle_id,
            parking_lot_id = %params.parking_lot_id,
            "Calculating charges from parameters"
        );

        if params.exit_time < params.entry_time {
            return Err(EngineError::ExitBeforeEntry {
                entry_time: params.entry_time,
                exit_time: params.exit_time,
            });
        }
        let now = Utc::now().naive_utc();
        if params.entry_time > now {
            return Err(EngineError::EntryInFuture {
                entry_time: params.entry_time,
            });
        }

        let stay = self.build_stay(params);
        let result = self.charge(&stay, params.exit_time)?;
        info!(total_cost = %result.total_cost, "Charge calculation complete");
        Ok(result)
    }

    /// Estimates charges for an expected stay length.
    ///
    /// The exit instant is derived as entry plus the estimated duration;
    /// the calculation is otherwise identical to [`ChargeEngine::calculate`].
    ///
    /// # Errors
    ///
    /// Returns a Validation error when the estimated duration is not
    /// positive or too large to yield a representable exit instant, plus
    /// every error [`ChargeEngine::calculate`] can return.
    pub fn estimate(&self, params: &EstimateParams) -> EngineResult<ChargeResult> {
        info!(
            user_id = %params.user_id,
            estimated_duration_minutes = params.estimated_duration_minutes,
            "Estimating charges"
        );

        if params.estimated_duration_minutes <= 0 {
            return Err(EngineError::NonPositiveDuration {
                minutes: params.estimated_duration_minutes,
            });
        }

        let exit_time = Duration::try_minutes(params.estimated_duration_minutes)
            .and_then(|duration| params.entry_time.checked_add_signed(duration))
            .ok_or(EngineError::DurationOutOfRange {
                minutes: params.estimated_duration_minutes,
            })?;
        self.calculate(&StayParams {
            user_id: params.user_id,
            vehicle_id: params.vehicle_id,
            parking_lot_id: params.parking_lot_id,
            vehicle_class_id: params.vehicle_class_id,
            entry_time: params.entry_time,
            exit_time,
        })
    }

    /// Re-prices a stay against a revised actual exit instant.
    ///
    /// The stay's pre-assigned tariff and linked reservation carry into the
    /// re-run; base cost, discount and overtime are all recomputed against
    /// the new exit. The stay's own exit time is ignored.
    ///
    /// # Errors
    ///
    /// Returns a Validation error when the actual exit precedes the entry,
    /// and a NotFound error when no tariff resolves for a stay outside the
    /// grace period.
    pub fn recalculate_with_exit(
        &self,
        stay: &Stay,
        actual_exit: NaiveDateTime,
    ) -> EngineResult<ChargeResult> {
        info!(stay_id = ?stay.id, actual_exit = %actual_exit, "Recalculating charges with actual exit");

        if actual_exit < stay.entry_time {
            return Err(EngineError::ExitBeforeEntry {
                entry_time: stay.entry_time,
                exit_time: actual_exit,
            });
        }

        let result = self.charge(stay, actual_exit)?;
        info!(total_cost = %result.total_cost, "Charge recalculation complete");
        Ok(result)
    }

    fn build_stay(&self, params: &StayParams) -> Stay {
        let reservation = self.lookup.find_active_reservation(
            params.user_id,
            params.vehicle_id,
            params.parking_lot_id,
            params.entry_time,
        );

        Stay {
            id: None,
            user_id: params.user_id,
            vehicle_id: params.vehicle_id,
            parking_lot_id: params.parking_lot_id,
            vehicle_class_id: params.vehicle_class_id,
            entry_time: params.entry_time,
            exit_time: Some(params.exit_time),
            tariff: None,
            reservation,
            subscription: None,
        }
    }

    /// Runs the pricing pipeline for a validated stay and exit instant.
    fn charge(&self, stay: &Stay, exit_time: NaiveDateTime) -> EngineResult<ChargeResult> {
        let duration_minutes = (exit_time - stay.entry_time).num_minutes();

        if is_within_grace_period(stay.entry_time, exit_time, self.policy.grace_period_minutes) {
            debug!(duration_minutes, "Stay is within the grace period");
            let breakdown = ChargeBreakdown {
                within_grace_period: true,
                warnings: vec![GRACE_PERIOD_WARNING.to_string()],
                calculation_details: GRACE_PERIOD_TRACE.to_string(),
                ..ChargeBreakdown::default()
            };
            return Ok(assemble_result(stay, exit_time, breakdown));
        }

        let tariff = resolve_tariff(stay, &self.lookup)?;
        debug!(tariff = %tariff.name, rate_per_hour = %tariff.rate_per_hour, "Resolved tariff");

        let mut details = String::new();
        let base_cost = calculate_base_cost(&tariff, duration_minutes);
        details.push_str(&format!(
            "Base cost calculation: {} for {} minutes\n",
            base_cost, duration_minutes
        ));

        let mut applied_discounts = Vec::new();
        let mut warnings = Vec::new();
        let mut plan_used = None;

        let subscription = self.lookup.find_active_subscription(
            stay.user_id,
            stay.vehicle_id,
            stay.parking_lot_id,
            stay.entry_time.date(),
        );
        let discount_amount = match &subscription {
            Some(subscription) => {
                let amount = calculate_plan_discount(base_cost, subscription);
                applied_discounts.push(discount_description(subscription));
                plan_used = Some(subscription.plan_name.clone());
                details.push_str(&format!("Plan discount applied: {}\n", amount));
                debug!(plan = %subscription.plan_name, discount = %amount, "Applied plan discount");
                amount
            }
            None => Decimal::ZERO,
        };

        let overtime = assess_overtime(
            &tariff,
            stay.reservation.as_ref(),
            exit_time,
            self.policy.overtime_multiplier,
        );
        if overtime.exceeded {
            warnings.push(format!(
                "Exceeded reservation by {} minutes",
                overtime.overtime_minutes
            ));
            details.push_str(&format!(
                "Overtime charges: {} for {} minutes\n",
                overtime.amount, overtime.overtime_minutes
            ));
            debug!(
                overtime_minutes = overtime.overtime_minutes,
                amount = %overtime.amount,
                "Reservation window exceeded"
            );
        }

        let breakdown = ChargeBreakdown {
            base_cost,
            discount_amount,
            overtime_amount: overtime.amount,
            tariff_used: Some(tariff.name.clone()),
            plan_used,
            has_reservation: stay.reservation.is_some(),
            exceeded_reservation: overtime.exceeded,
            within_grace_period: false,
            applied_discounts,
            warnings,
            calculation_details: details,
        };

        Ok(assemble_result(stay, exit_time, breakdown))
    }
}
