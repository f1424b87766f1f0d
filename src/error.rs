//! Error types for the leave entitlement engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing entitlements.

use thiserror::Error;

/// The main error type for the leave entitlement engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     input: "2024-13-01".to_string(),
///     message: "input is out of range".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid onboarding date '2024-13-01': input is out of range"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The onboarding date could not be parsed to a calendar date.
    #[error("Invalid onboarding date '{input}': {message}")]
    InvalidDate {
        /// The raw input that failed to parse.
        input: String,
        /// A description of the parse failure.
        message: String,
    },

    /// The projection horizon was zero or above the policy maximum.
    #[error("Invalid projection horizon {years}: must be between 1 and {max} years")]
    InvalidProjectionHorizon {
        /// The requested number of years.
        years: u32,
        /// The largest horizon the active policy accepts.
        max: u32,
    },

    /// Calendar arithmetic left the representable date range.
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        /// A description of the overflowing operation.
        message: String,
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

    /// The leave policy parsed but is internally inconsistent.
    #[error("Invalid leave policy: {message}")]
    InvalidPolicy {
        /// A description of the inconsistency.
        message: String,
    },

    /// The notification drafting collaborator failed.
    #[error("Notification drafting failed: {message}")]
    NotificationFailed {
        /// A description of the drafting failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
