//! Error types for the admin console.

use thiserror::Error;

use search_admin_repository::SearchAdminError;

/// Errors that can occur during console initialization or the admin session.
///
/// Any of these returned from `main` terminates the process with exit
/// code 1; a graceful decline is not an error and exits 0.
#[derive(Error, Debug)]
pub enum AdminCliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failure reading interactive input.
    #[error("Input error: {0}")]
    InputError(#[from] std::io::Error),

    /// Error from a search admin operation.
    #[error("Admin error: {0}")]
    AdminError(#[from] SearchAdminError),
}

impl AdminCliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
