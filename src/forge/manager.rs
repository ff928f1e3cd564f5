//! Manager that wraps forge implementations
use log::*;

use crate::{
    forge::{
        config::RemoteConfig,
        request::{CreatePrRequest, PrLabelsRequest, PullRequest, Release},
        traits::Forge,
    },
    result::Result,
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
    dry_run: bool,
}

impl ForgeManager {
    /// Wrap a forge. With `dry_run` set, reads go through and writes are
    /// logged and skipped.
    pub fn new(forge: Box<dyn Forge>, dry_run: bool) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
            dry_run,
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>> {
        debug!(
            "listing open pull requests for {}",
            self.remote_config.path()
        );
        self.forge.list_open_pull_requests().await
    }

    pub async fn list_releases(&self) -> Result<Vec<Release>> {
        debug!("listing releases for {}", self.remote_config.path());
        self.forge.list_releases().await
    }

    pub async fn create_pr(&self, req: CreatePrRequest) -> Result<PullRequest> {
        if self.dry_run {
            warn!("dry_run: would create PR: req: {:#?}", req);
            return Ok(PullRequest {
                number: 0,
                title: req.title,
                labels: vec![],
                html_url: None,
            });
        }

        self.forge.create_pr(req).await
    }

    pub async fn add_pr_labels(&self, req: PrLabelsRequest) -> Result<()> {
        if self.dry_run {
            warn!("dry_run: would add PR labels: req: {:#?}", req);
            return Ok(());
        }

        self.forge.add_pr_labels(req).await
    }
}
