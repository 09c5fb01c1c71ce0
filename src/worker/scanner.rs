use std::io::Write;

use alloy::rpc::types::Log;
use futures::{stream, StreamExt};
use log::{info, warn};

use crate::{
    config::ScanConfig,
    error::Result,
    models::PoolReport,
    rpc::{self, ChainReader},
    worker::{
        decoder::decode_initialize, fetcher::fetch_initialize_logs, reporter::Reporter,
        slot0::fetch_slot0,
    },
};

/// Outcome of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Logs returned by the node, skipped ones included
    pub logs_fetched: usize,
    pub reported: usize,
    pub skipped: usize,
}

/// Fetches `Initialize` logs and pairs each pool with its current slot0.
///
/// Slot0 lookups run `slot0_concurrency` at a time through an
/// order-preserving buffer, so report blocks always follow log order. With
/// the default of 1 every lookup completes before the next one starts.
pub struct PoolScanner<R> {
    reader: R,
    config: ScanConfig,
}

impl<R: ChainReader> PoolScanner<R> {
    pub fn new(reader: R, config: ScanConfig) -> Self {
        Self { reader, config }
    }

    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> Result<ScanSummary> {
        let logs = fetch_initialize_logs(
            &self.reader,
            self.config.pool_manager,
            self.config.block_range,
        )
        .await?;

        info!(
            "Fetched {} Initialize logs from {}",
            logs.len(),
            self.config.pool_manager
        );

        let mut summary = ScanSummary {
            logs_fetched: logs.len(),
            ..Default::default()
        };

        let mut results = stream::iter(logs.iter().map(|log| self.process_log(log)))
            .buffered(self.config.slot0_concurrency);

        while let Some(result) = results.next().await {
            match result {
                Ok(report) => {
                    reporter.write_pool(&report)?;
                    summary.reported += 1;
                },
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("Skipping Initialize log: {:#}", anyhow::Error::from(e));
                    summary.skipped += 1;
                },
            }
        }

        reporter.write_total(summary.logs_fetched)?;

        info!(
            "Scan finished: {} reported, {} skipped",
            summary.reported, summary.skipped
        );

        Ok(summary)
    }

    async fn process_log(&self, log: &Log) -> Result<PoolReport> {
        let event = decode_initialize(log)?;
        // Keyed by the pool id read from topic 1
        let slot0 = fetch_slot0(&self.reader, self.config.state_view, event.pool_id).await?;

        Ok(PoolReport { event, slot0 })
    }
}

/// Connect to the configured endpoint and run a full scan, writing the report to `out`.
pub async fn run_scan<W: Write>(config: ScanConfig, out: W) -> Result<ScanSummary> {
    let provider = rpc::connect(&config.rpc_url).await?;

    let scanner = PoolScanner::new(provider, config);
    let mut reporter = Reporter::new(out);

    scanner.run(&mut reporter).await
}
