//! Common test helper functions shared across test modules.
use secrecy::SecretString;
use url::Url;

use crate::{
    config::Config,
    forge::{
        config::{DEFAULT_API_URL, RemoteConfig},
        request::{PullRequest, Release},
    },
};

/// Creates a test RemoteConfig pointing at test/repo on github.com.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        api_url: Url::parse(DEFAULT_API_URL).unwrap(),
        owner: "test".to_string(),
        repo: "repo".to_string(),
        token: SecretString::from("test-token".to_string()),
    }
}

/// Creates a test Config releasing from "develop" into "main".
pub fn create_test_config() -> Config {
    Config {
        remote: create_test_remote_config(),
        base_branch: "develop".to_string(),
        target_branch: "main".to_string(),
        dry_run: false,
        debug: false,
    }
}

/// Creates a PullRequest with the given labels.
///
/// # Example
/// ```ignore
/// let pr = create_test_pull_request(1, "Release v0.0.2", vec!["bug"]);
/// ```
pub fn create_test_pull_request(
    number: u64,
    title: &str,
    labels: Vec<&str>,
) -> PullRequest {
    PullRequest {
        number,
        title: title.to_string(),
        labels: labels.into_iter().map(String::from).collect(),
        html_url: Some(format!("https://github.com/test/repo/pull/{number}")),
    }
}

/// Creates releases from tags, newest first.
pub fn create_test_releases(tags: &[&str]) -> Vec<Release> {
    tags.iter()
        .map(|t| Release {
            tag_name: t.to_string(),
        })
        .collect()
}
