//! Core types shared across the vouch execution gate.
//!
//! Everything here is plain data: credentials and key material (redacted
//! secret newtypes), the resolved caller identity, the point-in-time
//! membership decision, the remote endpoint description, and the outcome
//! of a gated invocation. The network-facing capabilities live in
//! `vouch-directory` and `vouch-session`.

pub mod config;
pub mod credential;
pub mod decision;
pub mod endpoint;
pub mod error;
pub mod identity;
pub mod outcome;

pub use config::GateConfig;
pub use credential::{Credential, SigningKey};
pub use decision::MembershipDecision;
pub use endpoint::RemoteEndpoint;
pub use error::ConfigError;
pub use identity::Identity;
pub use outcome::{CommandOutput, GateOutcome};
