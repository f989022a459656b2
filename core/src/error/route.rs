use thiserror::Error;

/// Error classes surfaced by the route pipeline, mapped onto process exit codes by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ErrorCode {
    ParseError = 2,
    ValidationError = 3,
    OutOfBounds = 4,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Validation failures for a single planning run. The first one encountered aborts the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid input string")]
    InvalidInput,

    #[error("Must specify two grid dimensions in the form XxY, e.g. 5x5")]
    GridFormat,

    #[error("Invalid integer string '{token}', must be a valid integer")]
    MalformedInteger { token: String },

    #[error("Invalid integer '{value}', must be a positive integer")]
    NegativeInteger { value: i64 },

    #[error("Invalid coordinates '{fragment}', must be a pair of positive integers, e.g. (1, 2)")]
    InvalidCoordinates { fragment: String },

    #[error("Point ({x}, {y}) must be within grid dimensions {width}x{height}")]
    OutOfBounds {
        x: u64,
        y: u64,
        width: u64,
        height: u64,
    },
}

impl RouteError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput => ErrorCode::ParseError,
            Self::GridFormat => ErrorCode::ParseError,
            Self::InvalidCoordinates { .. } => ErrorCode::ParseError,
            Self::MalformedInteger { .. } => ErrorCode::ValidationError,
            Self::NegativeInteger { .. } => ErrorCode::ValidationError,
            Self::OutOfBounds { .. } => ErrorCode::OutOfBounds,
        }
    }
}
