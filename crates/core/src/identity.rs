use std::fmt;

/// A resolved principal, produced by a self-lookup against the membership
/// directory and consumed only for the membership check and audit logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The directory-side login handle of the caller.
    pub handle: String,
}

impl Identity {
    /// Create an identity from a resolved handle.
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.handle)
    }
}
