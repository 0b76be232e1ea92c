//! Lookup seams between the engine and the caller's data.
//!
//! The engine never reaches into a store. Callers hand it an implementation
//! of these three narrow traits and the engine asks for exactly the records
//! a calculation needs: the cheapest tariff for a lot and vehicle class, the
//! subscription covering the entry date, and the reservation whose window
//! contains an instant.
//!
//! [`InMemoryLookup`] is a vec-backed provider for tests and for embedders
//! that keep their catalog in memory.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::models::{Reservation, SubscriptionUsage, Tariff};

/// Source of tariffs.
pub trait TariffLookup {
    /// Returns the cheapest active tariff for a parking lot and vehicle
    /// class, judged by hourly rate, or `None` when the pair has no tariff.
    fn find_cheapest_tariff(&self, parking_lot_id: Uuid, vehicle_class_id: Uuid)
    -> Option<Tariff>;
}

/// Source of subscription plan usage records.
pub trait SubscriptionLookup {
    /// Returns the active subscription covering `on_date` for the user,
    /// vehicle and parking lot, if any.
    fn find_active_subscription(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        parking_lot_id: Uuid,
        on_date: NaiveDate,
    ) -> Option<SubscriptionUsage>;
}

/// Source of reservations.
pub trait ReservationLookup {
    /// Returns a confirmed reservation whose window contains `at_time` for
    /// the user, vehicle and parking lot, if any.
    fn find_active_reservation(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        parking_lot_id: Uuid,
        at_time: NaiveDateTime,
    ) -> Option<Reservation>;
}

/// In-memory lookup provider.
///
/// Records are matched with the same rules a store-backed provider would
/// use: tariffs by cheapest hourly rate, subscriptions by status and
/// validity window, reservations by confirmed status and time window.
///
/// # Example
///
/// ```
/// use parking_charge_engine::lookup::{InMemoryLookup, TariffLookup};
/// use parking_charge_engine::models::Tariff;
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
///
/// let tariff = lookup.find_cheapest_tariff(parking_lot_id, vehicle_class_id);
/// assert_eq!(tariff.unwrap().name, "Standard Rate");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    tariffs: Vec<Tariff>,
    subscriptions: Vec<SubscriptionUsage>,
    reservations: Vec<Reservation>,
}

impl InMemoryLookup {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tariff to the catalog.
    pub fn add_tariff(&mut self, tariff: Tariff) {
        self.tariffs.push(tariff);
    }

    /// Adds a subscription usage record.
    pub fn add_subscription(&mut self, subscription: SubscriptionUsage) {
        self.subscriptions.push(subscription);
    }

    /// Adds a reservation.
    pub fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }
}

impl TariffLookup for InMemoryLookup {
    fn find_cheapest_tariff(
        &self,
        parking_lot_id: Uuid,
        vehicle_class_id: Uuid,
    ) -> Option<Tariff> {
        self.tariffs
            .iter()
            .filter(|tariff| {
                tariff.parking_lot_id == parking_lot_id
                    && tariff.vehicle_class_id == vehicle_class_id
            })
            .min_by_key(|tariff| tariff.rate_per_hour)
            .cloned()
    }
}

impl SubscriptionLookup for InMemoryLookup {
    fn find_active_subscription(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        parking_lot_id: Uuid,
        on_date: NaiveDate,
    ) -> Option<SubscriptionUsage> {
        self.subscriptions
            .iter()
            .find(|subscription| {
                subscription.user_id == user_id
                    && subscription.vehicle_id == vehicle_id
                    && subscription.parking_lot_id == parking_lot_id
                    && subscription.is_active_on(on_date)
            })
            .cloned()
    }
}

impl ReservationLookup for InMemoryLookup {
    fn find_active_reservation(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        parking_lot_id: Uuid,
        at_time: NaiveDateTime,
    ) -> Option<Reservation> {
        self.reservations
            .iter()
            .find(|reservation| {
                reservation.user_id == user_id
                    && reservation.vehicle_id == vehicle_id
                    && reservation.parking_lot_id == parking_lot_id
                    && reservation.is_active_at(at_time)
            })
            .cloned()
    }
}
