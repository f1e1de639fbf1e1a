use async_trait::async_trait;
use vouch_core::{CommandOutput, RemoteEndpoint, SigningKey};

use crate::error::SessionError;

/// A way of opening authenticated sessions against remote hosts.
///
/// Implementations own connection establishment, authentication, and host
/// verification. The [`CommandRunner`](crate::CommandRunner) drives the
/// returned session and is the only caller.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    /// Open one freshly authenticated session to `endpoint` as its user,
    /// authenticating with `key` (public-key only, no password fallback).
    async fn connect(
        &self,
        endpoint: &RemoteEndpoint,
        key: &SigningKey,
    ) -> Result<Box<dyn RemoteSession>, SessionError>;
}

/// One live authenticated session, good for exactly one command.
///
/// Implementations must release the underlying resource exactly once:
/// either when [`close`](Self::close) is called, or -- if the caller
/// unwinds before closing -- when the session is dropped. A session that
/// has been closed must release nothing on drop.
#[async_trait]
pub trait RemoteSession: Send {
    /// Run `command`, blocking until the remote process exits, with its
    /// output buffered in memory for the lifetime of the call.
    ///
    /// A nonzero exit status is [`SessionError::CommandFailed`] carrying
    /// the output captured before exit.
    async fn exec(&mut self, command: &str) -> Result<CommandOutput, SessionError>;

    /// Release the session.
    async fn close(&mut self) -> Result<(), SessionError>;
}

impl std::fmt::Debug for dyn RemoteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn RemoteSession")
    }
}
