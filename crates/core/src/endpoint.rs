use std::fmt;

use serde::{Deserialize, Serialize};

/// Default SSH port.
pub const DEFAULT_PORT: u16 = 22;

/// The fixed remote endpoint a gated command runs against.
///
/// Explicit configuration, never derived from the resolved identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEndpoint {
    /// Login user on the remote host.
    pub user: String,
    /// Remote hostname or address.
    pub host: String,
    /// Remote port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl RemoteEndpoint {
    /// Create an endpoint on the default SSH port.
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
            port: DEFAULT_PORT,
        }
    }

    /// Override the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// The `host:port` pair for a socket connection.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for RemoteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.user, self.host, self.port)
    }
}
