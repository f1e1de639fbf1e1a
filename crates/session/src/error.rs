use std::time::Duration;

use thiserror::Error;

/// Errors from the remote command session.
///
/// Every variant is fatal for the invocation that hit it; there is no
/// retry and no degraded mode. Variants that can occur after the remote
/// command started carry any output captured before the failure --
/// partial output is preserved, not discarded.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The signing key material is malformed. Raised before any network
    /// connection is attempted.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// The TCP connection or SSH handshake failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The remote host's key did not satisfy the configured policy.
    #[error("host key rejected: {0}")]
    HostKeyRejected(String),

    /// The remote host rejected the signing key.
    #[error("authentication rejected: {0}")]
    AuthenticationRejected(String),

    /// The remote side refused to open the command channel.
    #[error("session setup failed: {0}")]
    SessionSetupFailed(String),

    /// The remote command exited with a nonzero status.
    #[error("command exited with status {status}")]
    CommandFailed {
        /// Remote exit status.
        status: i32,
        /// Standard output captured before exit.
        stdout: String,
        /// Standard error captured before exit.
        stderr: String,
    },

    /// The channel errored while the command was running.
    #[error("command execution failed: {detail}")]
    Execution {
        /// What went wrong.
        detail: String,
        /// Standard output captured before the failure.
        stdout: String,
    },

    /// A connect or command deadline expired.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
}

impl SessionError {
    /// Output captured before a mid-command failure, if any.
    pub fn partial_stdout(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stdout, .. } | Self::Execution { stdout, .. } => {
                Some(stdout.as_str())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_preserves_partial_output() {
        let err = SessionError::CommandFailed {
            status: 2,
            stdout: "partial\n".into(),
            stderr: "boom\n".into(),
        };
        assert_eq!(err.partial_stdout(), Some("partial\n"));
        assert_eq!(err.to_string(), "command exited with status 2");
    }

    #[test]
    fn preflight_errors_have_no_output() {
        let err = SessionError::InvalidKeyMaterial("empty".into());
        assert!(err.partial_stdout().is_none());
    }

    #[test]
    fn error_display() {
        let err = SessionError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "timeout after 30s");

        let err = SessionError::HostKeyRejected("fingerprint mismatch".into());
        assert_eq!(err.to_string(), "host key rejected: fingerprint mismatch");
    }
}
