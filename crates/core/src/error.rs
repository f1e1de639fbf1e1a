use thiserror::Error;

/// Pre-flight configuration errors.
///
/// Raised before any network activity; a missing or invalid input aborts
/// the whole invocation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required input was absent.
    #[error("missing required configuration: {0}")]
    Missing(&'static str),

    /// An input was present but unusable.
    #[error("invalid configuration for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}
