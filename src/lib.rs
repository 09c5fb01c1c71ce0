pub mod abis;
pub mod config;
pub mod error;
pub mod models;
pub mod rpc;
pub mod utils;
pub mod worker;

pub use crate::config::{ScanConfig, Settings};
pub use error::ScanError;
pub use models::{InitializeEvent, PoolReport, Slot0Result};
pub use rpc::ChainReader;
pub use worker::{run_scan, PoolScanner, Reporter, ScanSummary};
