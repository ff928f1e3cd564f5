pub mod config;
pub mod error;
pub mod forge;
pub mod orchestrator;
pub mod result;
pub mod version;

pub use config::Config;
pub use error::CreateReleaseError;
pub use forge::{factory::ForgeFactory, manager::ForgeManager};
pub use orchestrator::{Orchestrator, OrchestratorConfig, ReleasePrOutcome};
pub use result::Result;

#[cfg(test)]
pub mod test_helpers;
