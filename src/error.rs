use alloy::primitives::B256;
use thiserror::Error;

/// Errors raised while scanning pools.
///
/// `Config`, `Connection`, `Fetch` and `Output` stop the scan. `Decode` and `Call` only
/// affect a single log entry, which is logged and skipped.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to connect to RPC endpoint {url}")]
    Connection {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to fetch Initialize logs")]
    Fetch(#[source] anyhow::Error),

    #[error("failed to decode log{}: {reason}", log_location(.log_index, .tx_hash))]
    Decode {
        log_index: Option<u64>,
        tx_hash: Option<B256>,
        reason: String,
    },

    #[error("getSlot0 call failed for pool {pool_id:#x}")]
    Call {
        pool_id: B256,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to write report")]
    Output(#[from] std::io::Error),
}

impl ScanError {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ScanError::Config(_)
                | ScanError::Connection { .. }
                | ScanError::Fetch(_)
                | ScanError::Output(_)
        )
    }

    /// Name of the pipeline step that raised the error, for top-level context.
    pub fn step(&self) -> &'static str {
        match self {
            ScanError::Config(_) => "Config step failed",
            ScanError::Connection { .. } => "Connect step failed",
            ScanError::Fetch(_) => "Log fetch step failed",
            ScanError::Decode { .. } => "Decode step failed",
            ScanError::Call { .. } => "Slot0 step failed",
            ScanError::Output(_) => "Report step failed",
        }
    }
}

fn log_location(log_index: &Option<u64>, tx_hash: &Option<B256>) -> String {
    let mut location = String::new();
    if let Some(index) = log_index {
        location.push_str(&format!(" {index}"));
    }
    if let Some(hash) = tx_hash {
        location.push_str(&format!(" in tx {hash:#x}"));
    }
    location
}

pub type Result<T> = std::result::Result<T, ScanError>;
