use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{instrument, warn};
use vouch_core::{CommandOutput, RemoteEndpoint, SigningKey};

use crate::error::SessionError;
use crate::transport::RemoteTransport;

/// Deadlines for one remote execution.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum wall-clock time to establish and authenticate the transport.
    pub connect_timeout: Duration,
    /// Maximum wall-clock time for the remote command itself.
    pub command_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            command_timeout: Duration::from_secs(30),
        }
    }
}

/// Drives one command through one freshly opened session.
///
/// The runner owns the session lifecycle: connect, execute, and release,
/// in that order, with the release guaranteed on success, on every failure
/// kind, and -- via the session's drop backstop -- on unwind.
pub struct CommandRunner {
    transport: Arc<dyn RemoteTransport>,
    config: SessionConfig,
}

impl CommandRunner {
    /// Create a runner over the given transport.
    pub fn new(transport: Arc<dyn RemoteTransport>, config: SessionConfig) -> Self {
        Self { transport, config }
    }

    /// Run `command` on `endpoint`, authenticating with `key`.
    ///
    /// Returns the captured output, or the first error encountered.
    /// Partial output captured before a mid-command failure travels inside
    /// the error (see [`SessionError::partial_stdout`]).
    #[instrument(skip(self, key), fields(%endpoint))]
    pub async fn run(
        &self,
        endpoint: &RemoteEndpoint,
        key: &SigningKey,
        command: &str,
    ) -> Result<CommandOutput, SessionError> {
        let mut session = match timeout(
            self.config.connect_timeout,
            self.transport.connect(endpoint, key),
        )
        .await
        {
            Ok(connected) => connected?,
            Err(_) => return Err(SessionError::Timeout(self.config.connect_timeout)),
        };

        let result = match timeout(self.config.command_timeout, session.exec(command)).await {
            Ok(executed) => executed,
            Err(_) => Err(SessionError::Timeout(self.config.command_timeout)),
        };

        // Teardown happens regardless of how the command went; a close
        // failure is logged but never masks the command's own result.
        if let Err(close_err) = session.close().await {
            warn!(error = %close_err, "remote session did not close cleanly");
        }

        result
    }
}
