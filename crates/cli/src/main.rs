//! Vouch CLI
//!
//! Runs one command on a fixed remote host, gated on the caller's
//! membership in a GitHub organization. Exits 0 when the command ran (its
//! stdout is printed) and also when membership was denied (the decision is
//! logged); any failure aborts with a nonzero status.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::bail;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use vouch_core::{Credential, GateConfig, GateOutcome, RemoteEndpoint, SigningKey};
use vouch_directory::{GithubDirectory, GithubDirectoryConfig};
use vouch_gateway::GatewayBuilder;
use vouch_session::{HostKeyPolicy, SessionConfig, SshTransport};

/// Vouch — run one remote command behind an organization membership gate.
#[derive(Parser, Debug)]
#[command(name = "vouch", version, about)]
struct Cli {
    /// Command to run on the remote host.
    #[arg(long, default_value = "pwd")]
    command: String,

    /// Organization the caller must belong to.
    #[arg(long, env = "VOUCH_ORG")]
    org: String,

    /// Token authorized to query organization membership.
    #[arg(long, env = "VOUCH_ORG_TOKEN", hide_env_values = true)]
    org_token: String,

    /// Token identifying the caller; defaults to the org token.
    #[arg(long, env = "VOUCH_CALLER_TOKEN", hide_env_values = true)]
    caller_token: Option<String>,

    /// Private key for remote authentication (OpenSSH or PEM text).
    #[arg(long, env = "VOUCH_SIGNING_KEY", hide_env_values = true)]
    signing_key: String,

    /// Login user on the remote host.
    #[arg(long, env = "VOUCH_REMOTE_USER")]
    remote_user: String,

    /// Remote hostname or address.
    #[arg(long, env = "VOUCH_REMOTE_HOST")]
    remote_host: String,

    /// Remote port.
    #[arg(long, env = "VOUCH_REMOTE_PORT", default_value_t = 22)]
    remote_port: u16,

    /// Directory API base URL (override for GitHub Enterprise).
    #[arg(long, env = "VOUCH_DIRECTORY_URL", default_value = "https://api.github.com")]
    directory_url: String,

    /// Verify the remote host key against this known_hosts file.
    #[arg(long, env = "VOUCH_KNOWN_HOSTS")]
    known_hosts: Option<PathBuf>,

    /// Require the remote host key to match this SHA256: fingerprint.
    #[arg(long, env = "VOUCH_HOST_FINGERPRINT")]
    host_fingerprint: Option<String>,

    /// Skip host key verification entirely. Insecure.
    #[arg(long)]
    insecure_skip_host_verification: bool,

    /// Deadline for establishing the remote session, in seconds.
    #[arg(long, default_value_t = 10)]
    connect_timeout_secs: u64,

    /// Deadline for the remote command, in seconds.
    #[arg(long, default_value_t = 30)]
    command_timeout_secs: u64,
}

/// Pick the host-key policy from the mutually exclusive flags.
///
/// Exactly one must be selected; the insecure mode is a deliberate opt-in,
/// never a fallback.
fn host_key_policy(
    known_hosts: Option<PathBuf>,
    host_fingerprint: Option<String>,
    insecure_skip: bool,
) -> anyhow::Result<HostKeyPolicy> {
    match (known_hosts, host_fingerprint, insecure_skip) {
        (Some(path), None, false) => Ok(HostKeyPolicy::KnownHosts(path)),
        (None, Some(fingerprint), false) => {
            if fingerprint.starts_with("SHA256:") {
                Ok(HostKeyPolicy::PinnedFingerprint(fingerprint))
            } else {
                bail!("--host-fingerprint must be a SHA256: fingerprint")
            }
        }
        (None, None, true) => Ok(HostKeyPolicy::InsecureAcceptAny),
        (None, None, false) => bail!(
            "a host key policy is required: pass --known-hosts, --host-fingerprint, \
             or explicitly opt into --insecure-skip-host-verification"
        ),
        _ => bail!(
            "--known-hosts, --host-fingerprint, and --insecure-skip-host-verification \
             are mutually exclusive"
        ),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let policy = host_key_policy(
        cli.known_hosts,
        cli.host_fingerprint,
        cli.insecure_skip_host_verification,
    )?;
    if policy == HostKeyPolicy::InsecureAcceptAny {
        warn!("running without host key verification");
    }

    let config = GateConfig {
        org_token: Credential::new(cli.org_token),
        caller_token: cli.caller_token.map(Credential::new),
        group: cli.org,
        signing_key: SigningKey::new(cli.signing_key),
        endpoint: RemoteEndpoint::new(cli.remote_user, cli.remote_host).with_port(cli.remote_port),
        command: cli.command,
    };

    let directory = GithubDirectory::new(GithubDirectoryConfig {
        base_url: cli.directory_url.trim_end_matches('/').to_owned(),
        ..GithubDirectoryConfig::default()
    });

    let gateway = GatewayBuilder::new()
        .directory(Arc::new(directory))
        .transport(Arc::new(SshTransport::new(policy)))
        .session_config(SessionConfig {
            connect_timeout: Duration::from_secs(cli.connect_timeout_secs),
            command_timeout: Duration::from_secs(cli.command_timeout_secs),
        })
        .config(config)
        .build()?;

    match gateway.invoke().await? {
        GateOutcome::Executed { output } => {
            info!("remote command completed");
            print!("{}", output.stdout);
            if !output.stderr.is_empty() {
                eprint!("{}", output.stderr);
            }
        }
        GateOutcome::Denied { decision } => {
            info!(
                identity = %decision.identity,
                group = %decision.group,
                "not a member; nothing executed"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hosts_selects_known_hosts_policy() {
        let policy = host_key_policy(Some(PathBuf::from("/etc/ssh/known_hosts")), None, false);
        assert!(matches!(policy, Ok(HostKeyPolicy::KnownHosts(_))));
    }

    #[test]
    fn pinned_fingerprint_requires_sha256_prefix() {
        let policy = host_key_policy(None, Some("SHA256:abcdef".into()), false);
        assert!(matches!(policy, Ok(HostKeyPolicy::PinnedFingerprint(_))));

        assert!(host_key_policy(None, Some("md5:abcdef".into()), false).is_err());
    }

    #[test]
    fn insecure_mode_must_be_explicit() {
        assert!(host_key_policy(None, None, false).is_err());
        assert!(matches!(
            host_key_policy(None, None, true),
            Ok(HostKeyPolicy::InsecureAcceptAny)
        ));
    }

    #[test]
    fn policies_are_mutually_exclusive() {
        assert!(host_key_policy(
            Some(PathBuf::from("known_hosts")),
            Some("SHA256:abcdef".into()),
            false
        )
        .is_err());
        assert!(host_key_policy(Some(PathBuf::from("known_hosts")), None, true).is_err());
    }

    #[test]
    fn cli_args_parse_with_required_values() {
        let cli = Cli::try_parse_from([
            "vouch",
            "--org",
            "engineering",
            "--org-token",
            "token",
            "--signing-key",
            "key",
            "--remote-user",
            "deploy",
            "--remote-host",
            "host1",
            "--insecure-skip-host-verification",
        ])
        .unwrap();
        assert_eq!(cli.command, "pwd");
        assert_eq!(cli.remote_port, 22);
        assert!(cli.insecure_skip_host_verification);
    }
}
