use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use sha2::{Digest, Sha256};

/// How the remote host's key is verified during the handshake.
///
/// There is deliberately no `Default` implementation: the caller must make
/// an explicit choice, and [`InsecureAcceptAny`](Self::InsecureAcceptAny)
/// is an opt-in that logs a warning, never a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKeyPolicy {
    /// Check the host key against an OpenSSH `known_hosts` file.
    KnownHosts(PathBuf),
    /// Require the host key's `SHA256:` fingerprint to match exactly.
    PinnedFingerprint(String),
    /// Accept any host key. Insecure; for lab use only.
    InsecureAcceptAny,
}

/// OpenSSH-style `SHA256:` fingerprint of raw host key bytes.
pub fn sha256_fingerprint(key: &[u8]) -> String {
    let digest = Sha256::digest(key);
    format!("SHA256:{}", STANDARD_NO_PAD.encode(digest))
}
