//! Error types for the Career Progression Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself is total and never fails; errors only arise
//! at the edges that touch the filesystem (configuration loading) or that
//! validate configuration invariants.

use thiserror::Error;

/// The main error type for the Career Progression Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use career_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// The seniority level ladder failed validation.
    #[error("Invalid level configuration: {message}")]
    InvalidLevelConfig {
        /// A description of what made the ladder invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
