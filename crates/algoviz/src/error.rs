use algoviz_core::{ConfigError, EngineError, InputError, UnknownAlgorithm};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for rejected user input.
pub const EXIT_INPUT: i32 = 2;

/// Exit code for a search whose input violates its sortedness precondition.
pub const EXIT_PRECONDITION: i32 = 3;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input(_) | Self::UnknownAlgorithm(_) | Self::Config(_) => EXIT_INPUT,
            Self::Engine(err) if err.is_precondition() => EXIT_PRECONDITION,
            _ => 1,
        }
    }
}
