//! Error types for quizsheet-core.

use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while configuring the noise filter.
///
/// Parsing itself never raises: malformed scan text degrades to
/// best-effort grouping instead of failing.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page label pattern: {0}")]
    PageLabelPattern(#[from] regex::Error),
}
