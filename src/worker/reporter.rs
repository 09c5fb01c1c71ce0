use std::io::{self, Write};

use crate::models::PoolReport;

pub const SEPARATOR: &str = "----------------------------------------";

/// Plain-text report writer.
///
/// One block per pool followed by [`SEPARATOR`], then a final count line.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_pool(&mut self, report: &PoolReport) -> io::Result<()> {
        let event = &report.event;
        let slot0 = &report.slot0;
        let out = &mut self.out;

        writeln!(out, "Pool ID: {:#x}", event.pool_id)?;
        writeln!(out, "Currency0: {}", event.currency0)?;
        writeln!(out, "Currency1: {}", event.currency1)?;
        writeln!(out, "Fee: {}", event.fee)?;
        writeln!(out, "Tick Spacing: {}", event.tick_spacing)?;
        writeln!(out, "Initial sqrtPriceX96: {}", event.sqrt_price_x96)?;
        writeln!(out, "Hooks: {}", event.hooks)?;
        writeln!(out, "Initial tick: {}", event.tick)?;

        writeln!(out)?;
        writeln!(out, "Current Slot0 Data:")?;
        writeln!(out, "sqrtPriceX96: {}", slot0.sqrt_price_x96)?;
        writeln!(out, "Current tick: {}", slot0.tick)?;
        writeln!(out, "Protocol Fee: {}", slot0.protocol_fee)?;
        writeln!(out, "LP Fee: {}", slot0.lp_fee)?;

        writeln!(out, "{SEPARATOR}")?;
        out.flush()
    }

    /// Counts fetched logs, skipped ones included.
    pub fn write_total(&mut self, logs_fetched: usize) -> io::Result<()> {
        writeln!(self.out, "Total events processed: {logs_fetched}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
