//! Configuration types for the charging policy.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from a YAML policy file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_GRACE_PERIOD_MINUTES, DEFAULT_OVERTIME_MULTIPLIER};
use crate::error::{EngineError, EngineResult};

/// Tunable charging policy values.
///
/// Both values carry engine-wide defaults (a 30-minute grace period and a
/// 1.5 overtime multiplier); a policy file may override either one, and
/// missing keys fall back to the defaults.
///
/// # Example
///
/// ```
/// use parking_charge_engine::config::ChargePolicy;
///
/// let policy: ChargePolicy = serde_yaml::from_str("grace_period_minutes: 15").unwrap();
/// assert_eq!(policy.grace_period_minutes, 15);
/// assert_eq!(policy.overtime_multiplier.to_string(), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// Stays of at most this many minutes are free.
    #[serde(default = "default_grace_period_minutes")]
    pub grace_period_minutes: i64,
    /// Penalty multiplier applied to reservation overtime.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

impl ChargePolicy {
    /// Checks that the policy values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] when the grace period is
    /// negative or the overtime multiplier is not positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.grace_period_minutes < 0 {
            return Err(EngineError::InvalidPolicy {
                field: "grace_period_minutes".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.overtime_multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "overtime_multiplier".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ChargePolicy {
    fn default() -> Self {
        ChargePolicy {
            grace_period_minutes: DEFAULT_GRACE_PERIOD_MINUTES,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

fn default_grace_period_minutes() -> i64 {
    DEFAULT_GRACE_PERIOD_MINUTES
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}
