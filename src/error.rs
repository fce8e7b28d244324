//! Error types for chart construction

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;

/// Errors raised while configuring a chart.
///
/// Serialization itself never fails: every error surfaces at the
/// constructor or setter that received the bad input.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Width/height outside the service limits
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// Malformed or out-of-range argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A bounded appender configured to reject is full
    #[error("feature {feature} accepts at most {limit} value(s)")]
    LimitExceeded { feature: String, limit: usize },

    /// Endpoint configuration could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
