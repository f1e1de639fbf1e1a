use std::sync::Arc;

use vouch_core::GateConfig;
use vouch_directory::DynDirectory;
use vouch_session::{CommandRunner, RemoteTransport, SessionConfig};

use crate::error::GatewayError;
use crate::gateway::Gateway;

/// Fluent builder for constructing a [`Gateway`] instance.
///
/// A directory, a transport, and a [`GateConfig`] must be supplied; the
/// session deadlines default to [`SessionConfig::default`].
pub struct GatewayBuilder {
    directory: Option<Arc<dyn DynDirectory>>,
    transport: Option<Arc<dyn RemoteTransport>>,
    session_config: SessionConfig,
    config: Option<GateConfig>,
}

impl GatewayBuilder {
    /// Create a new builder with all fields unset.
    pub fn new() -> Self {
        Self {
            directory: None,
            transport: None,
            session_config: SessionConfig::default(),
            config: None,
        }
    }

    /// Set the membership directory implementation.
    #[must_use]
    pub fn directory(mut self, directory: Arc<dyn DynDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Set the remote transport implementation.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn RemoteTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the session deadlines.
    #[must_use]
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Set the invocation configuration.
    #[must_use]
    pub fn config(mut self, config: GateConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the gateway, validating the configuration.
    pub fn build(self) -> Result<Gateway, GatewayError> {
        let directory = self
            .directory
            .ok_or_else(|| GatewayError::Configuration("a directory is required".into()))?;
        let transport = self
            .transport
            .ok_or_else(|| GatewayError::Configuration("a transport is required".into()))?;
        let config = self
            .config
            .ok_or_else(|| GatewayError::Configuration("a gate config is required".into()))?;
        config.validate()?;

        let runner = CommandRunner::new(transport, self.session_config);
        Ok(Gateway::new(directory, runner, config))
    }
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
