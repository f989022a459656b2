use thiserror::Error;

use super::route::RouteError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Route(#[from] RouteError),
    #[error("No input specified")]
    MissingInput,
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the usage block should be shown alongside this error.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::Route(_) | Self::MissingInput)
    }
}
