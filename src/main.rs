use create_release::{
    Config, ForgeFactory, Orchestrator, OrchestratorConfig, Result,
};
use log::*;

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("create_release")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    initialize_logger(config.debug)?;

    info!(
        "preparing release PR for {}: {} -> {}",
        config.remote.path(),
        config.base_branch,
        config.target_branch
    );

    let forge = ForgeFactory::create(&config)?;
    let dry_run = forge.dry_run();
    let orchestrator =
        Orchestrator::new(OrchestratorConfig::from(&config), forge);

    let outcome = orchestrator.create_release_pr().await?;

    if dry_run {
        warn!("dry run finished: no pull request or label was written");
    }

    match serde_json::to_string(&outcome) {
        Ok(json) => println!("{json}"),
        Err(err) => warn!("failed to serialize release PR outcome: {err}"),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    run().await?;

    Ok(())
}
