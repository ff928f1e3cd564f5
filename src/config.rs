//! Environment-driven configuration.
//!
//! Everything is read from the process environment; there are no flags and
//! no configuration files. Missing or invalid values produce
//! [`CreateReleaseError::Config`].
use secrecy::SecretString;
use std::env;
use url::Url;

use crate::{
    error::CreateReleaseError,
    forge::config::{DEFAULT_API_URL, RemoteConfig},
    result::Result,
};

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const OWNER_VAR: &str = "REPO_OWNER";
pub const REPO_VAR: &str = "REPO_NAME";
pub const BASE_BRANCH_VAR: &str = "BASE_BRANCH";
pub const TARGET_BRANCH_VAR: &str = "TARGET_BRANCH";
/// "owner/name", set by GitHub Actions. Used when owner or name is unset.
pub const GITHUB_REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
pub const API_URL_VAR: &str = "GITHUB_API_URL";
pub const DRY_RUN_VAR: &str = "CREATE_RELEASE_DRY_RUN";
pub const DEBUG_VAR: &str = "CREATE_RELEASE_DEBUG";

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Repository coordinates and credentials.
    pub remote: RemoteConfig,
    /// Branch the release PR is opened from (used as the PR head).
    pub base_branch: String,
    /// Branch the release PR merges into (used as the PR base).
    pub target_branch: String,
    /// Skip write calls, only log them.
    pub dry_run: bool,
    /// Enable debug logging.
    pub debug: bool,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Empty values are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let require = |key: &str| {
            get(key).ok_or_else(|| {
                CreateReleaseError::config(format!("{key} must be set"))
            })
        };

        let token = require(TOKEN_VAR)?;

        let (owner, repo) = match (get(OWNER_VAR), get(REPO_VAR)) {
            (Some(owner), Some(repo)) => (owner, repo),
            (owner, repo) => {
                let (fallback_owner, fallback_repo) =
                    match get(GITHUB_REPOSITORY_VAR) {
                        Some(full) => split_repository(&full)?,
                        None => {
                            return Err(CreateReleaseError::config(format!(
                                "{OWNER_VAR} and {REPO_VAR} must be set (or {GITHUB_REPOSITORY_VAR} as owner/name)"
                            )));
                        }
                    };
                (
                    owner.unwrap_or(fallback_owner),
                    repo.unwrap_or(fallback_repo),
                )
            }
        };

        let base_branch = require(BASE_BRANCH_VAR)?;
        let target_branch = require(TARGET_BRANCH_VAR)?;

        let api_url =
            get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url).map_err(|e| {
            CreateReleaseError::config(format!(
                "{API_URL_VAR} is not a valid url: {api_url}: {e}"
            ))
        })?;
        validate_scheme(&api_url)?;

        let dry_run = parse_flag(DRY_RUN_VAR, get(DRY_RUN_VAR))?;
        let debug = parse_flag(DEBUG_VAR, get(DEBUG_VAR))?;

        Ok(Self {
            remote: RemoteConfig {
                api_url,
                owner,
                repo,
                token: SecretString::from(token),
            },
            base_branch,
            target_branch,
            dry_run,
            debug,
        })
    }
}

/// Split "owner/name" into its two parts.
fn split_repository(full: &str) -> Result<(String, String)> {
    match full.split_once('/') {
        Some((owner, repo))
            if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
        {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(CreateReleaseError::config(format!(
            "{GITHUB_REPOSITORY_VAR} must be in the form owner/name, got: {full}"
        ))),
    }
}

/// Validate api url uses HTTP or HTTPS scheme.
fn validate_scheme(url: &Url) -> Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CreateReleaseError::config(format!(
            "only http and https schemes are supported for {API_URL_VAR}, got: {other}"
        ))),
    }
}

fn parse_flag(key: &str, value: Option<String>) -> Result<bool> {
    let Some(value) = value else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CreateReleaseError::config(format!(
            "{key} must be a boolean, got: {value}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    const REQUIRED: [(&str, Option<&str>); 5] = [
        (TOKEN_VAR, Some("token")),
        (OWNER_VAR, Some("octo")),
        (REPO_VAR, Some("widgets")),
        (BASE_BRANCH_VAR, Some("develop")),
        (TARGET_BRANCH_VAR, Some("main")),
    ];

    const OPTIONAL_UNSET: [(&str, Option<&str>); 4] = [
        (GITHUB_REPOSITORY_VAR, None),
        (API_URL_VAR, None),
        (DRY_RUN_VAR, None),
        (DEBUG_VAR, None),
    ];

    fn with_env<F: FnOnce()>(overrides: &[(&str, Option<&str>)], f: F) {
        let mut vars: Vec<(&str, Option<&str>)> =
            REQUIRED.iter().chain(OPTIONAL_UNSET.iter()).copied().collect();

        for (key, value) in overrides {
            if let Some(existing) = vars.iter_mut().find(|(k, _)| k == key) {
                existing.1 = *value;
            } else {
                vars.push((*key, *value));
            }
        }

        temp_env::with_vars(vars, f);
    }

    #[test]
    fn loads_required_values_from_env() {
        with_env(&[], || {
            let config = Config::from_env().unwrap();

            assert_eq!(config.remote.owner, "octo");
            assert_eq!(config.remote.repo, "widgets");
            assert_eq!(config.remote.token.expose_secret(), "token");
            assert_eq!(config.remote.api_url.as_str(), "https://api.github.com/");
            assert_eq!(config.base_branch, "develop");
            assert_eq!(config.target_branch, "main");
            assert!(!config.dry_run);
            assert!(!config.debug);
        });
    }

    #[test]
    fn fails_when_token_missing() {
        with_env(&[(TOKEN_VAR, None)], || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, CreateReleaseError::Config(_)));
            assert!(err.to_string().contains(TOKEN_VAR));
        });
    }

    #[test]
    fn treats_empty_value_as_missing() {
        with_env(&[(TARGET_BRANCH_VAR, Some("  "))], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains(TARGET_BRANCH_VAR));
        });
    }

    #[test]
    fn fails_when_base_branch_missing() {
        with_env(&[(BASE_BRANCH_VAR, None)], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains(BASE_BRANCH_VAR));
        });
    }

    #[test]
    fn falls_back_to_github_repository() {
        with_env(
            &[
                (OWNER_VAR, None),
                (REPO_VAR, None),
                (GITHUB_REPOSITORY_VAR, Some("acme/rockets")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.remote.owner, "acme");
                assert_eq!(config.remote.repo, "rockets");
            },
        );
    }

    #[test]
    fn explicit_owner_wins_over_github_repository() {
        with_env(
            &[
                (REPO_VAR, None),
                (GITHUB_REPOSITORY_VAR, Some("acme/rockets")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.remote.owner, "octo");
                assert_eq!(config.remote.repo, "rockets");
            },
        );
    }

    #[test]
    fn fails_when_repository_coordinates_missing() {
        with_env(&[(OWNER_VAR, None), (REPO_VAR, None)], || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, CreateReleaseError::Config(_)));
        });
    }

    #[test]
    fn rejects_malformed_github_repository() {
        with_env(
            &[(OWNER_VAR, None), (GITHUB_REPOSITORY_VAR, Some("acme"))],
            || {
                let err = Config::from_env().unwrap_err();
                assert!(err.to_string().contains("owner/name"));
            },
        );
    }

    #[test]
    fn supports_enterprise_api_url() {
        with_env(
            &[(API_URL_VAR, Some("https://github.example.com/api/v3"))],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.remote.api_url.host_str(),
                    Some("github.example.com")
                );
            },
        );
    }

    #[test]
    fn only_supports_http_and_https_schemes() {
        with_env(&[(API_URL_VAR, Some("ftp://github.example.com"))], || {
            assert!(Config::from_env().is_err());
        });

        with_env(&[(API_URL_VAR, Some("not a url"))], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn parses_boolean_flags() {
        with_env(&[(DRY_RUN_VAR, Some("TRUE")), (DEBUG_VAR, Some("1"))], || {
            let config = Config::from_env().unwrap();
            assert!(config.dry_run);
            assert!(config.debug);
        });

        with_env(&[(DRY_RUN_VAR, Some("off"))], || {
            assert!(!Config::from_env().unwrap().dry_run);
        });

        with_env(&[(DRY_RUN_VAR, Some("maybe"))], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains(DRY_RUN_VAR));
        });
    }

    #[test]
    fn loads_from_custom_lookup() {
        let config = Config::from_lookup(|key| match key {
            TOKEN_VAR => Some("t".into()),
            GITHUB_REPOSITORY_VAR => Some("a/b".into()),
            BASE_BRANCH_VAR => Some("develop".into()),
            TARGET_BRANCH_VAR => Some("main".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.remote.path(), "a/b");
    }
}
