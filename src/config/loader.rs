//! Policy file loading.
//!
//! This module provides [`ChargePolicy::load`] for reading a charging
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ChargePolicy;

impl ChargePolicy {
    /// Loads a charging policy from a YAML file.
    ///
    /// Missing keys fall back to the engine defaults; the parsed policy is
    /// validated before it is returned.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/charging.yaml")
    ///
    /// # Returns
    ///
    /// Returns the policy on success, or an error if the file is missing,
    /// contains invalid YAML, or holds out-of-range values.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use parking_charge_engine::config::ChargePolicy;
    ///
    /// let policy = ChargePolicy::load("./config/charging.yaml")?;
    /// println!("Grace period: {} minutes", policy.grace_period_minutes);
    /// # Ok::<(), parking_charge_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy: ChargePolicy =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        policy.validate()?;
        Ok(policy)
    }
}
