//! Error types for the simulation core and its data files.

use thiserror::Error;

/// Errors that prevent the simulation from starting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// The presentation layer cannot render the scene.
    #[error("Environment unsupported: {reason}")]
    EnvironmentUnsupported { reason: String },
}

/// Errors that can occur when loading RON configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    Read { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },

    /// The file parsed but holds values the simulation cannot run with.
    #[error("Invalid value in '{path}': {details}")]
    Invalid { path: String, details: String },
}
