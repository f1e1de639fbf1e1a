//! The vouch gateway: resolve the caller, check group membership, and only
//! then run the configured command on the remote endpoint.
//!
//! Authorization is an explicit two-step guard. The membership boolean is
//! computed and checked before the execution branch is reachable at all;
//! an error anywhere aborts the invocation (fail-closed), and a negative
//! decision is a normal [`Denied`](vouch_core::GateOutcome::Denied)
//! outcome rather than an error.

mod builder;
mod error;
mod gateway;

pub use builder::GatewayBuilder;
pub use error::GatewayError;
pub use gateway::Gateway;
