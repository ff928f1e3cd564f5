//! Interface to the GitHub forge.
//!
//! Provides token-based authentication, pull request listing and creation,
//! issue labeling and release listing through a common trait so the release
//! workflow can run against a mock.

/// Configuration, constants and authentication for the forge.
pub mod config;

/// Builds the forge client from loaded configuration.
pub mod factory;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Wrapper applying dry-run handling around any forge.
pub mod manager;

/// Request and response types shared by forge implementations.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;
