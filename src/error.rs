/// Error types shared by every gumdrop command
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting catalogs, running the wizard or
/// touching the configuration file
#[derive(Debug, Error)]
pub enum AppError {
    /// Network-related errors (connection refused, TLS, timeouts in the transport)
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered with a body we could not decode
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// The account behind the credential is not usable
    #[error("Account is inactive (status: {0})")]
    InactiveAccount(String),

    /// Fatal precondition or operator input problem
    #[error("{0}")]
    Validation(String),

    /// No configuration file at the resolved location
    #[error("No config file found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// The configuration file is readable by someone other than its owner
    #[error("Insecure file permissions ({mode:o}) for config! Run: chmod 0600 {}", path.display())]
    InsecurePermissions { path: PathBuf, mode: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Terminal prompt failed for a reason other than an interrupt
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// The operator pressed Ctrl-C at a prompt
    #[error("interrupted")]
    Interrupted,
}

impl AppError {
    /// Interrupts end the process cleanly; everything else is a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Interrupted => 0,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else {
            AppError::Network(e.to_string())
        }
    }
}
