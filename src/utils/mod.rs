//! Utility functions for pool scanning.
//!
//! - [`pool_id`] - Uniswap V4 pool ID computation

mod pool_id;

pub use pool_id::compute_v4_pool_id;
