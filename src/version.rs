//! Release tag parsing and next-version computation.
//!
//! Tags have the form `vMAJOR.MINOR.PATCH`. MINOR and PATCH roll over after
//! 9 rather than growing without bound:
//!
//! - `v1.2.3` → `v1.2.4`
//! - `v1.2.9` → `v1.3.0`
//! - `v1.9.9` → `v2.0.0`
//!
//! With no previous release the first tag is `v0.0.1`.
//!
//! Both rollover conditions are checked against the latest tag itself, not
//! applied one after another. Applying them in sequence would turn `v1.9.8`
//! into `v2.0.0` and `v1.9.9` into `v1.10.0`; checking the latest tag keeps
//! `v1.9.8 → v1.9.9` and `v1.9.9 → v2.0.0`.
//!
//! A component that would overflow `u64` is reported as
//! [`CreateReleaseError::VersionOverflow`].
use regex::Regex;
use std::{fmt, str::FromStr, sync::LazyLock};

use crate::{error::CreateReleaseError, forge::request::Release, result::Result};

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v(?<major>[0-9]+)\.(?<minor>[0-9]+)\.(?<patch>[0-9]+)$").unwrap()
});

/// Highest value MINOR and PATCH reach before rolling over.
pub const ROLLOVER_AT: u64 = 9;

/// A `vMAJOR.MINOR.PATCH` release tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseTag {
    /// Tag used when the repository has no releases yet.
    pub const INITIAL: ReleaseTag = ReleaseTag {
        major: 0,
        minor: 0,
        patch: 1,
    };

    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The tag following this one.
    pub fn next(&self) -> Result<Self> {
        let bump = |n: u64| {
            n.checked_add(1).ok_or_else(|| {
                CreateReleaseError::version_overflow(self.to_string())
            })
        };

        if self.patch == ROLLOVER_AT && self.minor == ROLLOVER_AT {
            return Ok(Self::new(bump(self.major)?, 0, 0));
        }

        if self.patch == ROLLOVER_AT {
            return Ok(Self::new(self.major, bump(self.minor)?, 0));
        }

        Ok(Self::new(self.major, self.minor, bump(self.patch)?))
    }
}

impl FromStr for ReleaseTag {
    type Err = CreateReleaseError;

    fn from_str(tag: &str) -> Result<Self> {
        let captures = TAG_REGEX
            .captures(tag)
            .ok_or_else(|| CreateReleaseError::malformed_tag(tag))?;

        // ascii digits only, so this can only fail on overflow
        let component = |name: &str| {
            captures[name]
                .parse::<u64>()
                .map_err(|_| CreateReleaseError::malformed_tag(tag))
        };

        Ok(Self {
            major: component("major")?,
            minor: component("minor")?,
            patch: component("patch")?,
        })
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Compute the next release tag from releases ordered newest first. Only the
/// first release is consulted.
pub fn next_release_tag(releases: &[Release]) -> Result<ReleaseTag> {
    match releases.first() {
        None => Ok(ReleaseTag::INITIAL),
        Some(latest) => latest.tag_name.parse::<ReleaseTag>()?.next(),
    }
}
