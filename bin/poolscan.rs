use std::io;

use anyhow::Context;
use jemallocator::Jemalloc;
use log::info;
use simple_logger::SimpleLogger;

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use poolscan::{run_scan, Settings};

#[tokio::main()]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;

    SimpleLogger::new()
        .with_level(settings.log_level()?)
        .init()
        .context("Failed to initialize logger")?;

    let config = settings.scan_config()?;

    info!(
        "Scanning Initialize events of {} via {}",
        config.pool_manager, config.rpc_url
    );

    let summary = run_scan(config, io::stdout().lock())
        .await
        .map_err(|e| {
            let step = e.step();
            anyhow::Error::from(e).context(step)
        })?;

    info!(
        "Done: {} logs, {} reported, {} skipped",
        summary.logs_fetched, summary.reported, summary.skipped
    );

    Ok(())
}
