use ::config::{
    builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, FileFormat,
};
use alloy::primitives::Address;
use log::LevelFilter;
use serde::Deserialize;

use crate::error::ScanError;

/// Arbitrum One public RPC.
pub const DEFAULT_RPC_URL: &str = "https://arb1.arbitrum.io/rpc";

/// Uniswap V4 PoolManager on Arbitrum One.
pub const DEFAULT_POOL_MANAGER: &str = "0x360E68faCcca8cA495c1B759Fd9EEe466db9FB32";

/// Uniswap V4 StateView on Arbitrum One.
pub const DEFAULT_STATE_VIEW: &str = "0x76fd297e2d437cd7f76d50f01afe6160f86e9990";

/// RPC endpoint configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct RpcSettings {
    pub url: String,
}

/// Addresses of the two contracts the scan reads from.
#[derive(Debug, Deserialize, Clone)]
pub struct ContractSettings {
    /// Emits the `Initialize` events
    pub pool_manager: String,
    /// Answers `getSlot0` for a pool id
    pub state_view: String,
}

/// Log query and enrichment tuning.
///
/// With no `from_block` the log query spans the entire chain history in a
/// single `eth_getLogs` request. Many public endpoints reject such a range;
/// setting `from_block` switches to windows of `block_chunk_size` blocks.
#[derive(Debug, Deserialize, Clone)]
pub struct ScanSettings {
    #[serde(default)]
    pub from_block: Option<u64>,
    /// Defaults to the chain head when paginating
    #[serde(default)]
    pub to_block: Option<u64>,
    #[serde(default = "default_block_chunk_size")]
    pub block_chunk_size: u64,
    /// Number of `getSlot0` calls allowed in flight
    #[serde(default = "default_slot0_concurrency")]
    pub slot0_concurrency: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            from_block: None,
            to_block: None,
            block_chunk_size: default_block_chunk_size(),
            slot0_concurrency: default_slot0_concurrency(),
        }
    }
}

fn default_block_chunk_size() -> u64 {
    100_000
}

fn default_slot0_concurrency() -> usize {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Root application configuration.
///
/// Layered as built-in defaults, then an optional `config.yaml`, then
/// `POOLSCAN_*` environment variables (`POOLSCAN_RPC__URL`,
/// `POOLSCAN_SCAN__FROM_BLOCK`, ...).
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub rpc: RpcSettings,
    pub contracts: ContractSettings,
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Self::builder()?
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("POOLSCAN")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = s.try_deserialize()?;

        Ok(settings)
    }

    /// Parse settings from a YAML document layered over the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("rpc.url", DEFAULT_RPC_URL)?
            .set_default("contracts.pool_manager", DEFAULT_POOL_MANAGER)?
            .set_default("contracts.state_view", DEFAULT_STATE_VIEW)
    }

    pub fn log_level(&self) -> Result<LevelFilter, ScanError> {
        self.log_level.parse().map_err(|_| {
            ScanError::Config(format!(
                "log_level must be one of off, error, warn, info, debug, trace (got {})",
                self.log_level
            ))
        })
    }

    /// Validate the raw settings into the typed configuration the scan runs on.
    pub fn scan_config(&self) -> Result<ScanConfig, ScanError> {
        let pool_manager = parse_address("contracts.pool_manager", &self.contracts.pool_manager)?;
        let state_view = parse_address("contracts.state_view", &self.contracts.state_view)?;

        if self.scan.slot0_concurrency == 0 {
            return Err(ScanError::Config(
                "scan.slot0_concurrency must be at least 1".to_string(),
            ));
        }

        let block_range = match self.scan.from_block {
            None => {
                if self.scan.to_block.is_some() {
                    return Err(ScanError::Config(
                        "scan.to_block requires scan.from_block".to_string(),
                    ));
                }
                BlockRange::Unbounded
            },
            Some(from) => {
                if self.scan.block_chunk_size == 0 {
                    return Err(ScanError::Config(
                        "scan.block_chunk_size must be at least 1".to_string(),
                    ));
                }
                if let Some(to) = self.scan.to_block {
                    if to < from {
                        return Err(ScanError::Config(format!(
                            "scan.to_block ({to}) is below scan.from_block ({from})"
                        )));
                    }
                }
                BlockRange::Paged {
                    from,
                    to: self.scan.to_block,
                    chunk_size: self.scan.block_chunk_size,
                }
            },
        };

        Ok(ScanConfig {
            rpc_url: self.rpc.url.clone(),
            pool_manager,
            state_view,
            block_range,
            slot0_concurrency: self.scan.slot0_concurrency,
        })
    }
}

fn parse_address(key: &str, value: &str) -> Result<Address, ScanError> {
    value
        .parse()
        .map_err(|e| ScanError::Config(format!("{key} is not a valid address ({value}): {e}")))
}

/// Block span covered by the `Initialize` log query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRange {
    /// One query without block bounds (entire history)
    Unbounded,
    /// `[from, to]` in windows of `chunk_size` blocks; `to` defaults to the head
    Paged {
        from: u64,
        to: Option<u64>,
        chunk_size: u64,
    },
}

/// Everything the scan pipeline needs, passed explicitly into its entry point.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub rpc_url: String,
    pub pool_manager: Address,
    pub state_view: Address,
    pub block_range: BlockRange,
    pub slot0_concurrency: usize,
}
