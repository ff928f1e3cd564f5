//! Release pull request workflow.
//!
//! One run walks `CheckExisting → {AlreadyPending | ComputeVersion →
//! CreatePR → LabelPR}`. Nothing is carried between runs; each run starts
//! from what the forge reports. The pending check is advisory: two runs
//! racing each other can both create a PR.
use log::*;
use serde::Serialize;

use crate::{
    config::Config,
    forge::{
        config::{PENDING_LABEL, RELEASE_PR_BODY, RELEASE_PR_TITLE_PREFIX},
        manager::ForgeManager,
        request::{CreatePrRequest, PrLabelsRequest, PullRequest},
    },
    result::Result,
    version::{ReleaseTag, next_release_tag},
};

/// Branches used for the generated pull request.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Used as the PR head.
    pub base_branch: String,
    /// Used as the PR base.
    pub target_branch: String,
}

impl From<&Config> for OrchestratorConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_branch: config.base_branch.clone(),
            target_branch: config.target_branch.clone(),
        }
    }
}

/// Result of a release PR run.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReleasePrOutcome {
    /// A PR labeled pending was already open; nothing was written.
    AlreadyPending,
    /// A new release PR was opened and labeled.
    Created {
        tag: String,
        pull_request: PullRequest,
    },
}

pub struct Orchestrator {
    config: OrchestratorConfig,
    forge: ForgeManager,
}

impl Orchestrator {
    pub fn new(config: OrchestratorConfig, forge: ForgeManager) -> Self {
        Self { config, forge }
    }

    /// True when any open pull request carries the pending label.
    pub async fn pending_release_pr_exists(&self) -> Result<bool> {
        let prs = self.forge.list_open_pull_requests().await?;

        if let Some(pr) = prs.iter().find(|pr| pr.has_label(PENDING_LABEL)) {
            info!(
                "found open release PR #{} labeled {PENDING_LABEL}",
                pr.number
            );
            return Ok(true);
        }

        Ok(false)
    }

    /// Tag for the next release, derived from the newest published release.
    pub async fn next_release_tag(&self) -> Result<ReleaseTag> {
        let releases = self.forge.list_releases().await?;

        match releases.first() {
            Some(latest) => debug!("latest release: {}", latest.tag_name),
            None => info!("no releases found: starting from scratch"),
        }

        next_release_tag(&releases)
    }

    /// Open and label a release PR unless one is already pending.
    pub async fn create_release_pr(&self) -> Result<ReleasePrOutcome> {
        if self.pending_release_pr_exists().await? {
            info!("release PR already pending: nothing to do");
            return Ok(ReleasePrOutcome::AlreadyPending);
        }

        let tag = self.next_release_tag().await?;
        info!("next release tag: {tag}");

        let pr = self
            .forge
            .create_pr(CreatePrRequest {
                head_branch: self.config.base_branch.clone(),
                base_branch: self.config.target_branch.clone(),
                title: format!("{RELEASE_PR_TITLE_PREFIX}{tag}"),
                body: RELEASE_PR_BODY.to_string(),
            })
            .await?;

        info!(
            "created release PR #{}: {} ({} -> {})",
            pr.number, pr.title, self.config.base_branch, self.config.target_branch
        );

        // a PR created but left unlabeled on failure here is not rolled back
        self.forge
            .add_pr_labels(PrLabelsRequest {
                pr_number: pr.number,
                labels: vec![PENDING_LABEL.into()],
            })
            .await?;

        info!("labeled release PR #{} with {PENDING_LABEL}", pr.number);

        Ok(ReleasePrOutcome::Created {
            tag: tag.to_string(),
            pull_request: pr,
        })
    }
}
