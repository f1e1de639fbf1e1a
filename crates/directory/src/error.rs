use thiserror::Error;

/// Errors from the membership directory.
///
/// Both variants are fatal for the invocation that hit them and must never
/// be interpreted as an authorization answer. "Not a member" is a valid
/// `false` from [`Directory::is_member`](crate::Directory::is_member), not
/// an error.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The credential could not be resolved to an identity (invalid or
    /// expired credential, or the directory was unreachable).
    #[error("identity resolution failed: {0}")]
    IdentityResolution(String),

    /// The membership query itself failed (transport or auth failure
    /// against the directory, or an insufficiently privileged credential).
    #[error("membership check failed: {0}")]
    MembershipCheck(String),
}
