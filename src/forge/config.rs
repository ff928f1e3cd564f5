//! Configuration for the GitHub forge connection.
use secrecy::SecretString;
use url::Url;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default page size for paginated list queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;
/// Label applied to release PRs while waiting for merge.
pub const PENDING_LABEL: &str = "createrelease:pending";
/// Title prefix for release PRs; the new tag is appended.
pub const RELEASE_PR_TITLE_PREFIX: &str = "Release ";
/// Body of every generated release PR.
pub const RELEASE_PR_BODY: &str =
    "This is an automated PR to create a new release";

/// Remote repository connection configuration for authenticating and
/// interacting with GitHub.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// REST API base URL (github.com or an Enterprise instance).
    pub api_url: Url,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl RemoteConfig {
    /// "owner/repo" form used in log output.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
