use payoff_config::ConfigError;
use payoff_core::PayoffError;
use payoff_storage_json::StorageError;
use thiserror::Error;

/// Failures surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },
    #[error(transparent)]
    Payoff(#[from] PayoffError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl CliError {
    pub fn invalid(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        CliError::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Process exit code: 2 for rejected arguments (as clap uses), 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgument { .. } => 2,
            _ => 1,
        }
    }
}
