pub mod decoder;
pub mod fetcher;
pub mod reporter;
pub mod scanner;
pub mod slot0;

#[cfg(test)]
pub(crate) mod testing;

pub use decoder::decode_initialize;
pub use fetcher::{block_windows, fetch_initialize_logs, initialize_filter};
pub use reporter::Reporter;
pub use scanner::{run_scan, PoolScanner, ScanSummary};
pub use slot0::fetch_slot0;
