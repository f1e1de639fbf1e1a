use thiserror::Error;
use vouch_core::ConfigError;
use vouch_directory::DirectoryError;
use vouch_session::SessionError;

/// Errors that can abort a gated invocation.
///
/// Nothing here is recovered locally; every variant surfaces to the
/// operator verbatim.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The membership directory could not answer.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// The remote session failed.
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// The gateway was misconfigured (e.g. missing required components).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<ConfigError> for GatewayError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_errors_convert() {
        let err: GatewayError =
            DirectoryError::IdentityResolution("bad credential".into()).into();
        assert_eq!(
            err.to_string(),
            "directory error: identity resolution failed: bad credential"
        );
    }

    #[test]
    fn session_errors_convert() {
        let err: GatewayError = SessionError::InvalidKeyMaterial("empty".into()).into();
        assert!(matches!(err, GatewayError::Session(_)));
    }
}
