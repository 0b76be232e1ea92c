//! Configuration for the parking charge engine.
//!
//! This module provides the [`ChargePolicy`] type holding the engine's
//! tunable values (grace period length and overtime multiplier) and its
//! YAML file loading.
//!
//! # Example
//!
//! ```no_run
//! use parking_charge_engine::config::ChargePolicy;
//!
//! let policy = ChargePolicy::load("./config/charging.yaml").unwrap();
//! println!("Overtime multiplier: {}", policy.overtime_multiplier);
//! ```

mod loader;
mod types;

pub use types::ChargePolicy;
