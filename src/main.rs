use anyhow::Context;
use clap::Parser;
use lambda_showcase::utils::logger;
use lambda_showcase::{CliConfig, Dispatcher};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting lambda-showcase");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let selector = config.selector();
    let stdout = std::io::stdout();
    let mut dispatcher = Dispatcher::new(stdout.lock());

    dispatcher
        .run(selector)
        .with_context(|| format!("failed to write demonstration output for {:?}", selector))?;

    tracing::info!("Demonstration {:?} completed", selector);
    Ok(())
}
