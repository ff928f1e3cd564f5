//! Factory for creating forge implementations based on configuration.

use log::*;

use crate::{
    config::Config,
    forge::{github::Github, manager::ForgeManager, traits::Forge},
    result::Result,
};

/// Factory for creating forge implementations.
pub struct ForgeFactory;

impl ForgeFactory {
    /// Create a ForgeManager for the configured repository.
    pub fn create(config: &Config) -> Result<ForgeManager> {
        let forge = Self::create_github(config)?;

        if config.dry_run {
            warn!("dry run enabled: no pull requests or labels will be written");
        }

        Ok(ForgeManager::new(forge, config.dry_run))
    }

    fn create_github(config: &Config) -> Result<Box<dyn Forge>> {
        Ok(Box::new(Github::new(config.remote.clone())?))
    }
}

