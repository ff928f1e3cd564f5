//! Result type for create-release.
//!
//! Every fallible operation in the crate returns [`Result`], carrying a
//! [`CreateReleaseError`] so callers can tell configuration, client, query,
//! tag and write failures apart. `main` converts the final error into a
//! `color_eyre::Report` for display.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::result::Result;
//!
//! fn example_function() -> Result<String> {
//!     Ok("success".to_string())
//! }
//! ```

use crate::error::CreateReleaseError;

/// Standard result type used throughout create-release.
pub type Result<T> = std::result::Result<T, CreateReleaseError>;
