use serde::{Deserialize, Serialize};

use crate::decision::MembershipDecision;

/// Captured output of one remote command execution.
///
/// Ownership transfers to the caller; the session that produced it is
/// already torn down by the time this value exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Everything the remote command wrote to standard output.
    pub stdout: String,
    /// Everything the remote command wrote to standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Build an output from captured streams.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Outcome of one gated invocation.
///
/// A negative membership decision is a normal terminal outcome, not an
/// error; errors are reserved for directory or session failures.
#[derive(Debug)]
pub enum GateOutcome {
    /// The caller was authorized and the command ran to completion.
    Executed {
        /// Captured output of the remote command.
        output: CommandOutput,
    },
    /// The caller is not a member of the required group; no connection
    /// was attempted.
    Denied {
        /// The decision that stopped the flow.
        decision: MembershipDecision,
    },
}

impl GateOutcome {
    /// Whether the command was executed.
    pub fn executed(&self) -> bool {
        matches!(self, Self::Executed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Identity;

    #[test]
    fn denied_outcome_is_not_executed() {
        let outcome = GateOutcome::Denied {
            decision: MembershipDecision::new(Identity::new("mallory"), "engineering", false),
        };
        assert!(!outcome.executed());
    }

    #[test]
    fn executed_outcome_carries_output() {
        let outcome = GateOutcome::Executed {
            output: CommandOutput::new("/home/alice\n", ""),
        };
        assert!(outcome.executed());
        match outcome {
            GateOutcome::Executed { output } => assert_eq!(output.stdout, "/home/alice\n"),
            GateOutcome::Denied { .. } => unreachable!(),
        }
    }
}
