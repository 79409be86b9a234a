//! Error types for loading and validating configuration.

use std::io;

/// Errors produced while reading or checking [`super::params::SteeringParams`].
#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    /// The parameter file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The parameter file is not valid JSON for the parameter schema.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parameter has a value the steering model cannot work with.
    #[error("invalid parameter `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}
