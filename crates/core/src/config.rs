use crate::credential::{Credential, SigningKey};
use crate::endpoint::RemoteEndpoint;
use crate::error::ConfigError;

/// Explicit configuration for one gated invocation.
///
/// Constructed once at the process boundary and passed into the gateway;
/// the core never reads ambient environment state.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Credential authorized to query directory membership.
    pub org_token: Credential,
    /// Credential identifying the caller. Falls back to `org_token` when
    /// absent (the two are logically distinct inputs that may share a
    /// value).
    pub caller_token: Option<Credential>,
    /// Group the caller must belong to.
    pub group: String,
    /// Private key material for the remote session.
    pub signing_key: SigningKey,
    /// The fixed remote endpoint to execute against.
    pub endpoint: RemoteEndpoint,
    /// The single command to run once authorized.
    pub command: String,
}

impl GateConfig {
    /// The credential used for the identity self-lookup.
    pub fn effective_caller_token(&self) -> &Credential {
        self.caller_token.as_ref().unwrap_or(&self.org_token)
    }

    /// Validate inputs that clap cannot check for us.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.group.trim().is_empty() {
            return Err(ConfigError::Missing("group"));
        }
        if self.command.trim().is_empty() {
            return Err(ConfigError::Missing("command"));
        }
        if self.endpoint.user.trim().is_empty() {
            return Err(ConfigError::Missing("remote user"));
        }
        if self.endpoint.host.trim().is_empty() {
            return Err(ConfigError::Missing("remote host"));
        }
        if self.endpoint.port == 0 {
            return Err(ConfigError::Invalid {
                field: "remote port",
                reason: "port must be nonzero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GateConfig {
        GateConfig {
            org_token: Credential::new("org-token"),
            caller_token: None,
            group: "engineering".into(),
            signing_key: SigningKey::new("key"),
            endpoint: RemoteEndpoint::new("deploy", "host1"),
            command: "pwd".into(),
        }
    }

    #[test]
    fn caller_token_falls_back_to_org_token() {
        let cfg = config();
        assert_eq!(cfg.effective_caller_token().expose(), "org-token");

        let cfg = GateConfig {
            caller_token: Some(Credential::new("caller-token")),
            ..config()
        };
        assert_eq!(cfg.effective_caller_token().expose(), "caller-token");
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_group() {
        let cfg = GateConfig {
            group: "  ".into(),
            ..config()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Missing("group"))));
    }

    #[test]
    fn validate_rejects_port_zero() {
        let cfg = GateConfig {
            endpoint: RemoteEndpoint::new("deploy", "host1").with_port(0),
            ..config()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn validate_rejects_empty_command() {
        let cfg = GateConfig {
            command: String::new(),
            ..config()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Missing("command"))
        ));
    }
}
