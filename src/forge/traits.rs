//! Traits related to remote git forges
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{CreatePrRequest, PrLabelsRequest, PullRequest, Release},
    },
    result::Result,
};

/// Capabilities the release orchestration needs from a forge. An instance is
/// bound to a single repository described by its [`RemoteConfig`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Forge {
    fn remote_config(&self) -> RemoteConfig;
    /// All open pull requests in the repository.
    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>>;
    /// Published releases, newest first.
    async fn list_releases(&self) -> Result<Vec<Release>>;
    async fn create_pr(&self, req: CreatePrRequest) -> Result<PullRequest>;
    async fn add_pr_labels(&self, req: PrLabelsRequest) -> Result<()>;
}
