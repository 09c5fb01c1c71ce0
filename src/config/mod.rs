mod settings;

pub use settings::{
    BlockRange, ContractSettings, RpcSettings, ScanConfig, ScanSettings, Settings,
    DEFAULT_POOL_MANAGER, DEFAULT_RPC_URL, DEFAULT_STATE_VIEW,
};
