//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, params};

use crate::{
    error::{CreateReleaseError, describe_github_error},
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{CreatePrRequest, PrLabelsRequest, PullRequest, Release},
        traits::Forge,
    },
    result::Result,
};

/// GitHub forge implementation using Octocrab for API interactions with
/// pull requests, labels and releases.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let client_err =
            |e: octocrab::Error| CreateReleaseError::client_init(e.to_string());

        let instance = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(config.api_url.to_string())
            .map_err(client_err)?
            .build()
            .map_err(client_err)?;

        debug!(
            "created github client for {} against {}",
            config.path(),
            config.api_url
        );

        Ok(Self { config, instance })
    }
}

fn to_pull_request(pr: octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        labels: pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|l| l.name)
            .collect(),
        html_url: pr.html_url.map(|u| u.to_string()),
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn list_open_pull_requests(&self) -> Result<Vec<PullRequest>> {
        let query_err = |e: octocrab::Error| {
            CreateReleaseError::remote_query(describe_github_error(
                "failed to list open pull requests",
                &e,
            ))
        };

        let page = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(params::State::Open)
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await
            .map_err(query_err)?;

        let prs = self.instance.all_pages(page).await.map_err(query_err)?;

        debug!("found {} open pull requests", prs.len());

        Ok(prs.into_iter().map(to_pull_request).collect())
    }

    async fn list_releases(&self) -> Result<Vec<Release>> {
        let page = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .list()
            .per_page(DEFAULT_PAGE_SIZE)
            .send()
            .await
            .map_err(|e| {
                CreateReleaseError::remote_query(describe_github_error(
                    "failed to list releases",
                    &e,
                ))
            })?;

        Ok(page
            .into_iter()
            .map(|r| Release {
                tag_name: r.tag_name,
            })
            .collect())
    }

    async fn create_pr(&self, req: CreatePrRequest) -> Result<PullRequest> {
        let pr = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .create(req.title, req.head_branch, req.base_branch)
            .body(req.body)
            .send()
            .await
            .map_err(|e| {
                CreateReleaseError::remote_write(describe_github_error(
                    "failed to create pull request",
                    &e,
                ))
            })?;

        Ok(to_pull_request(pr))
    }

    async fn add_pr_labels(&self, req: PrLabelsRequest) -> Result<()> {
        self.instance
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(req.pr_number, &req.labels)
            .await
            .map_err(|e| {
                CreateReleaseError::remote_write(describe_github_error(
                    &format!(
                        "failed to add labels to pull request #{}",
                        req.pr_number
                    ),
                    &e,
                ))
            })?;

        Ok(())
    }
}

