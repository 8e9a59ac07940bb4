use anyhow::Context;
use clap::Parser;
use std::io::Write;
use todo_fetch::utils::{logger, validation::Validate};
use todo_fetch::{CliConfig, EtlEngine, HttpFetcher, RunOutcome, TodoPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = HttpFetcher::new().context("failed to initialise HTTP client")?;
    let engine = EtlEngine::new(TodoPipeline::new(fetcher, config));

    let mut stdout = std::io::stdout();
    match engine.run(&mut stdout).await {
        Ok(RunOutcome::NoData) => tracing::info!("Nothing fetched"),
        Ok(RunOutcome::Displayed { fetched, displayed }) => {
            tracing::info!(fetched, displayed, "✅ Run completed");
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {} (Category: {:?})", e, e.category());
            let _ = stdout.flush();

            if e.is_fetch_error() {
                eprintln!("Error fetching data: {}", e);
            } else {
                eprintln!("Error processing data: {}", e);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
