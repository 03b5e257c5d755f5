use ledgerlens_config::ConfigError;
use ledgerlens_core::CoreError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Failures surfaced by the facade and the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Output error: {0}")]
    Output(String),
}

impl AppError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Core(CoreError::InvalidArgument(_))
            | AppError::Core(CoreError::UnknownGranularity(_))
            | AppError::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Output(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(err.to_string())
    }
}
