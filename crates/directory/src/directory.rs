use async_trait::async_trait;
use vouch_core::{Credential, Identity};

use crate::error::DirectoryError;

/// Strongly-typed membership directory trait with native `async fn`.
///
/// This trait is **not** object-safe because it uses native `async fn`
/// methods (which desugar to opaque `impl Future` return types). If you
/// need dynamic dispatch, use [`DynDirectory`] instead -- every
/// `Directory` automatically implements `DynDirectory` via a blanket
/// implementation.
pub trait Directory: Send + Sync {
    /// Returns the unique name of this directory backend.
    fn name(&self) -> &str;

    /// Resolve the identity the credential belongs to (self-lookup, not
    /// lookup-by-name).
    fn resolve_self(
        &self,
        credential: &Credential,
    ) -> impl std::future::Future<Output = Result<Identity, DirectoryError>> + Send;

    /// Answer whether `handle` is a member of `group`.
    ///
    /// `credential` is the authorization credential for the query, which
    /// may differ from the caller credential used in
    /// [`resolve_self`](Self::resolve_self). A legitimate negative answer
    /// is `Ok(false)`; errors are reserved for failures of the query
    /// itself.
    fn is_member(
        &self,
        handle: &str,
        group: &str,
        credential: &Credential,
    ) -> impl std::future::Future<Output = Result<bool, DirectoryError>> + Send;
}

/// Object-safe directory trait for use behind `Arc<dyn DynDirectory>`.
///
/// Uses [`macro@async_trait`] to enable dynamic dispatch of async methods.
/// You generally should not implement this trait directly -- instead
/// implement [`Directory`] and rely on the blanket implementation.
#[async_trait]
pub trait DynDirectory: Send + Sync {
    /// Returns the unique name of this directory backend.
    fn name(&self) -> &str;

    /// Resolve the identity the credential belongs to.
    async fn resolve_self(&self, credential: &Credential) -> Result<Identity, DirectoryError>;

    /// Answer whether `handle` is a member of `group`.
    async fn is_member(
        &self,
        handle: &str,
        group: &str,
        credential: &Credential,
    ) -> Result<bool, DirectoryError>;
}

/// Blanket implementation: any type that implements [`Directory`] also
/// implements [`DynDirectory`], bridging the static and dynamic dispatch
/// worlds.
#[async_trait]
impl<T: Directory + Sync> DynDirectory for T {
    fn name(&self) -> &str {
        Directory::name(self)
    }

    async fn resolve_self(&self, credential: &Credential) -> Result<Identity, DirectoryError> {
        Directory::resolve_self(self, credential).await
    }

    async fn is_member(
        &self,
        handle: &str,
        group: &str,
        credential: &Credential,
    ) -> Result<bool, DirectoryError> {
        Directory::is_member(self, handle, group, credential).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    /// A mock directory for testing the trait and blanket impl.
    struct MockDirectory {
        backend_name: String,
        member: bool,
        should_fail: bool,
    }

    impl Directory for MockDirectory {
        fn name(&self) -> &str {
            &self.backend_name
        }

        async fn resolve_self(&self, _credential: &Credential) -> Result<Identity, DirectoryError> {
            if self.should_fail {
                return Err(DirectoryError::IdentityResolution("mock failure".into()));
            }
            Ok(Identity::new("alice"))
        }

        async fn is_member(
            &self,
            _handle: &str,
            _group: &str,
            _credential: &Credential,
        ) -> Result<bool, DirectoryError> {
            if self.should_fail {
                return Err(DirectoryError::MembershipCheck("mock failure".into()));
            }
            Ok(self.member)
        }
    }

    #[tokio::test]
    async fn blanket_dyn_directory_impl() {
        let directory: Arc<dyn DynDirectory> = Arc::new(MockDirectory {
            backend_name: "mock".into(),
            member: true,
            should_fail: false,
        });
        assert_eq!(directory.name(), "mock");

        let cred = Credential::new("token");
        let identity = directory.resolve_self(&cred).await.unwrap();
        assert_eq!(identity.handle, "alice");
        assert!(directory.is_member("alice", "engineering", &cred).await.unwrap());
    }

    #[tokio::test]
    async fn non_membership_is_false_not_error() {
        let directory = MockDirectory {
            backend_name: "mock".into(),
            member: false,
            should_fail: false,
        };
        let cred = Credential::new("token");
        assert!(!Directory::is_member(&directory, "mallory", "engineering", &cred)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn failures_surface_as_errors() {
        let directory = MockDirectory {
            backend_name: "mock".into(),
            member: true,
            should_fail: true,
        };
        let cred = Credential::new("token");
        let err = Directory::resolve_self(&directory, &cred).await.unwrap_err();
        assert!(matches!(err, DirectoryError::IdentityResolution(_)));
    }
}
