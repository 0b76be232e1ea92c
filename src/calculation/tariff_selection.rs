//! Tariff resolution.
//!
//! A stay may carry a pre-assigned tariff; otherwise the cheapest tariff
//! for its parking lot and vehicle class is looked up. A stay that neither
//! carries nor finds a tariff cannot be priced.

use crate::error::{EngineError, EngineResult};
use crate::lookup::TariffLookup;
use crate::models::{Stay, Tariff};

/// Resolves the tariff used to price a stay.
///
/// # Errors
///
/// Returns [`EngineError::TariffNotFound`] when the stay has no pre-assigned
/// tariff and the lookup yields none for its lot and vehicle class.
pub fn resolve_tariff(stay: &Stay, tariffs: &dyn TariffLookup) -> EngineResult<Tariff> {
    if let Some(tariff) = &stay.tariff {
        return Ok(tariff.clone());
    }

    tariffs
        .find_cheapest_tariff(stay.parking_lot_id, stay.vehicle_class_id)
        .ok_or(EngineError::TariffNotFound {
            parking_lot_id: stay.parking_lot_id,
            vehicle_class_id: stay.vehicle_class_id,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::InMemoryLookup;
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use uuid::Uuid;

    fn tariff(parking_lot_id: Uuid, vehicle_class_id: Uuid, name: &str, rate: &str) -> Tariff {
        Tariff {
            id: Uuid::new_v4(),
            parking_lot_id,
            vehicle_class_id,
            name: name.to_string(),
            rate_per_hour: Decimal::from_str(rate).unwrap(),
            rate_per_day: None,
            rate_per_week: None,
            rate_per_month: None,
            minimum_time_minutes: 60,
        }
    }

    fn stay(parking_lot_id: Uuid, vehicle_class_id: Uuid, tariff: Option<Tariff>) -> Stay {
        let entry_time = NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Stay {
            id: None,
            user_id: Uuid::new_v4(),
            vehicle_id: Uuid::new_v4(),
            parking_lot_id,
            vehicle_class_id,
            entry_time,
            exit_time: Some(entry_time + Duration::minutes(120)),
            tariff,
            reservation: None,
            subscription: None,
        }
    }

    #[test]
    fn test_pre_assigned_tariff_takes_precedence() {
        let parking_lot_id = Uuid::new_v4();
        let vehicle_class_id = Uuid::new_v4();

        let mut lookup = InMemoryLookup::new();
        lookup.add_tariff(tariff(parking_lot_id, vehicle_class_id, "Economy", "1.00"));

        let assigned = tariff(parking_lot_id, vehicle_class_id, "Premium", "8.00");
        let s = stay(parking_lot_id, vehicle_class_id, Some(assigned));

        let resolved = resolve_tariff(&s, &lookup).unwrap();
        assert_eq!(resolved.name, "Premium");
    }

    #[test]
    fn test_falls_back_to_cheapest_lookup() {
        let parking_lot_id = Uuid::new_v4();
        let vehicle_class_id = Uuid::new_v4();

        let mut lookup = InMemoryLookup::new();
        lookup.add_tariff(tariff(parking_lot_id, vehicle_class_id, "Standard", "5.00"));
        lookup.add_tariff(tariff(parking_lot_id, vehicle_class_id, "Economy", "3.00"));

        let s = stay(parking_lot_id, vehicle_class_id, None);

        let resolved = resolve_tariff(&s, &lookup).unwrap();
        assert_eq!(resolved.name, "Economy");
    }

    #[test]
    fn test_missing_tariff_is_an_error() {
        let parking_lot_id = Uuid::new_v4();
        let vehicle_class_id = Uuid::new_v4();
        let s = stay(parking_lot_id, vehicle_class_id, None);

        let error = resolve_tariff(&s, &InMemoryLookup::new()).unwrap_err();
        assert!(matches!(
            error,
            EngineError::TariffNotFound {
                parking_lot_id: lot,
                vehicle_class_id: class,
            } if lot == parking_lot_id && class == vehicle_class_id
        ));
    }
}
