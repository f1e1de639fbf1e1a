//! Remote command session capability for the vouch execution gate.
//!
//! One session, one command: the [`CommandRunner`] opens a freshly
//! authenticated transport, runs exactly one command with its output
//! buffered in memory, and guarantees the session is released on every
//! exit path. Key material is parsed before any socket is opened, and the
//! remote host's identity is checked against an explicit, injectable
//! [`HostKeyPolicy`] -- there is no silent skip.

mod error;
mod key;
mod policy;
mod runner;
mod ssh;
mod transport;

pub use error::SessionError;
pub use key::validate_signing_key;
pub use policy::{HostKeyPolicy, sha256_fingerprint};
pub use runner::{CommandRunner, SessionConfig};
pub use ssh::SshTransport;
pub use transport::{RemoteSession, RemoteTransport};
