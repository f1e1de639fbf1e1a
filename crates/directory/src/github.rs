use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};
use vouch_core::{Credential, Identity};

use crate::directory::Directory;
use crate::error::DirectoryError;

/// Default base URL of the GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default request timeout for directory calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`GithubDirectory`].
#[derive(Debug, Clone)]
pub struct GithubDirectoryConfig {
    /// Base URL of the GitHub API (override for GitHub Enterprise or a
    /// test server).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value; GitHub rejects requests without one.
    pub user_agent: String,
}

impl Default for GithubDirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: "vouch".to_owned(),
        }
    }
}

/// Response body of `GET /user`, reduced to the field we consume.
#[derive(Debug, Deserialize)]
struct AuthenticatedUser {
    login: String,
}

/// Membership directory backed by the GitHub organizations API.
///
/// Implements the [`Directory`] trait over two endpoints: `GET /user` for
/// the credential self-lookup and `GET /orgs/{org}/members/{user}` for the
/// membership answer. Neither call is retried or cached.
pub struct GithubDirectory {
    config: GithubDirectoryConfig,
    client: Client,
}

impl GithubDirectory {
    /// Create a directory with the given configuration.
    ///
    /// Redirects are disabled: the members endpoint signals "requester may
    /// not ask" with a 302, which must surface as a status rather than be
    /// followed.
    pub fn new(config: GithubDirectoryConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build HTTP client");

        Self { config, client }
    }

    /// Create a directory with a custom HTTP client.
    ///
    /// Useful for testing or for sharing a connection pool.
    pub fn with_client(config: GithubDirectoryConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn get(&self, url: &str, credential: &Credential) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(credential.expose())
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", &self.config.user_agent)
    }
}

impl Directory for GithubDirectory {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "github"
    }

    #[instrument(skip_all)]
    async fn resolve_self(&self, credential: &Credential) -> Result<Identity, DirectoryError> {
        let url = format!("{}/user", self.config.base_url);
        let response = self
            .get(&url, credential)
            .send()
            .await
            .map_err(|e| DirectoryError::IdentityResolution(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::IdentityResolution(format!(
                "directory returned {status}"
            )));
        }

        let user: AuthenticatedUser = response
            .json()
            .await
            .map_err(|e| DirectoryError::IdentityResolution(e.to_string()))?;

        debug!(handle = %user.login, "resolved caller identity");
        Ok(Identity::new(user.login))
    }

    #[instrument(skip(self, credential))]
    async fn is_member(
        &self,
        handle: &str,
        group: &str,
        credential: &Credential,
    ) -> Result<bool, DirectoryError> {
        let url = format!("{}/orgs/{}/members/{}", self.config.base_url, group, handle);
        let response = self
            .get(&url, credential)
            .send()
            .await
            .map_err(|e| DirectoryError::MembershipCheck(e.to_string()))?;

        membership_from_status(response.status())
    }
}

/// Map the members-endpoint status to an answer.
///
/// 204 means member, 404 means not a member (a valid negative, not an
/// error), 302 means the requesting credential may not ask at all. Anything
/// else is a directory failure and fails closed.
fn membership_from_status(status: StatusCode) -> Result<bool, DirectoryError> {
    match status.as_u16() {
        204 => Ok(true),
        404 => Ok(false),
        302 => Err(DirectoryError::MembershipCheck(
            "credential is not authorized to query membership".into(),
        )),
        _ => Err(DirectoryError::MembershipCheck(format!(
            "directory returned {status}"
        ))),
    }
}
