//! Core data models for the parking charge engine.
//!
//! This module contains all the domain models used throughout the engine.

mod charge_result;
mod reservation;
mod stay;
mod subscription;
mod tariff;

pub use charge_result::ChargeResult;
pub use reservation::{DEFAULT_RESERVATION_WINDOW_HOURS, Reservation, ReservationStatus};
pub use stay::Stay;
pub use subscription::{SubscriptionStatus, SubscriptionUsage};
pub use tariff::{DEFAULT_MINIMUM_TIME_MINUTES, Tariff};
