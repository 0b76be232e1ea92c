//! Error types for the parking charge engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating charges.

use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the parking charge engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. Every variant
/// belongs to one of a small set of [`ErrorKind`]s so callers can map
/// failures without matching on display strings.
///
/// # Example
///
/// ```
/// use parking_charge_engine::error::{EngineError, ErrorKind};
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// assert_eq!(error.kind(), ErrorKind::Config);
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No tariff applies to the stay's parking lot and vehicle class.
    #[error("No applicable tariff found for parking lot '{parking_lot_id}' and vehicle class '{vehicle_class_id}'")]
    TariffNotFound {
        /// The parking lot that was searched.
        parking_lot_id: Uuid,
        /// The vehicle class that was searched.
        vehicle_class_id: Uuid,
    },

    /// The stay has no exit time recorded yet.
    #[error("Cannot calculate charges for an active stay")]
    StayStillActive,

    /// The exit instant precedes the entry instant.
    #[error("Exit time cannot be before entry time")]
    ExitBeforeEntry {
        /// The recorded entry instant.
        entry_time: NaiveDateTime,
        /// The offending exit instant.
        exit_time: NaiveDateTime,
    },

    /// The entry instant lies in the future.
    #[error("Entry time cannot be in the future")]
    EntryInFuture {
        /// The offending entry instant.
        entry_time: NaiveDateTime,
    },

    /// An estimated duration was zero or negative.
    #[error("Estimated duration must be positive")]
    NonPositiveDuration {
        /// The offending duration in minutes.
        minutes: i64,
    },

    /// An estimated duration was too large to yield a representable exit
    /// instant.
    #[error("Estimated duration is out of range")]
    DurationOutOfRange {
        /// The offending duration in minutes.
        minutes: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A charging policy value was out of range.
    #[error("Invalid policy value for '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

/// Coarse classification of engine errors.
///
/// Callers typically map these to their own failure surface, e.g. an HTTP
/// layer would translate `NotFound` to 404 and `Validation` to 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required entity could not be resolved.
    NotFound,
    /// The input data was malformed or inconsistent.
    Validation,
    /// The engine configuration could not be loaded or was invalid.
    Config,
}

impl EngineError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::TariffNotFound { .. } => ErrorKind::NotFound,
            EngineError::StayStillActive
            | EngineError::ExitBeforeEntry { .. }
            | EngineError::EntryInFuture { .. }
            | EngineError::NonPositiveDuration { .. }
            | EngineError::DurationOutOfRange { .. } => ErrorKind::Validation,
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidPolicy { .. } => ErrorKind::Config,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
