use std::sync::Arc;

use tracing::{info, instrument};
use vouch_core::{GateConfig, GateOutcome, MembershipDecision};
use vouch_directory::DynDirectory;
use vouch_session::CommandRunner;

use crate::error::GatewayError;

/// The fail-closed pipeline: resolve, authorize, execute.
///
/// Holds no shared mutable state; concurrent invocations need no
/// coordination as long as each carries its own configuration. Decisions
/// are never cached across invocations.
pub struct Gateway {
    directory: Arc<dyn DynDirectory>,
    runner: CommandRunner,
    config: GateConfig,
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("directory", &self.directory.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Gateway {
    pub(crate) fn new(
        directory: Arc<dyn DynDirectory>,
        runner: CommandRunner,
        config: GateConfig,
    ) -> Self {
        Self {
            directory,
            runner,
            config,
        }
    }

    /// Run one gated invocation end to end.
    ///
    /// The remote session is reachable only after a `true` membership
    /// decision for the resolved identity within this same invocation.
    /// A negative decision short-circuits to
    /// [`GateOutcome::Denied`] without any connection attempt.
    #[instrument(skip(self), fields(directory = self.directory.name(), group = %self.config.group))]
    pub async fn invoke(&self) -> Result<GateOutcome, GatewayError> {
        let identity = self
            .directory
            .resolve_self(self.config.effective_caller_token())
            .await?;

        let is_member = self
            .directory
            .is_member(&identity.handle, &self.config.group, &self.config.org_token)
            .await?;
        let decision = MembershipDecision::new(identity, self.config.group.clone(), is_member);
        info!(
            identity = %decision.identity,
            group = %decision.group,
            is_member = decision.is_member,
            "membership decision"
        );

        // The explicit gate: execution is unreachable without a positive
        // decision from this invocation.
        if !decision.is_member {
            return Ok(GateOutcome::Denied { decision });
        }

        let output = self
            .runner
            .run(
                &self.config.endpoint,
                &self.config.signing_key,
                &self.config.command,
            )
            .await?;

        Ok(GateOutcome::Executed { output })
    }
}
