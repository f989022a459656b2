#[allow(clippy::module_inception)]
pub mod error;
pub mod route;

pub use error::CliError;
pub use route::{ErrorCode, RouteError};
