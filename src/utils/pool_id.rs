//! Uniswap V4 pool ID utilities.

use alloy::primitives::{
    aliases::{I24, U24},
    keccak256, Address, B256,
};
use alloy::sol_types::SolValue;

/// Compute the Uniswap V4 pool ID from the pool key.
///
/// ```text
/// keccak256(abi.encode(currency0, currency1, fee, tickSpacing, hooks))
/// ```
///
/// Currencies are sorted by address first (lower address is currency0), which
/// matches Uniswap's `sortsBefore`. The native token is the zero address, so it
/// always ends up as currency0.
pub fn compute_v4_pool_id(
    currency_a: Address,
    currency_b: Address,
    fee: U24,
    tick_spacing: I24,
    hooks: Address,
) -> B256 {
    let (currency0, currency1) =
        if currency_a < currency_b { (currency_a, currency_b) } else { (currency_b, currency_a) };

    // uint24/int24 occupy a full word each, same as the u32/i32 widening below
    let encoded =
        (currency0, currency1, fee.to::<u32>(), tick_spacing.as_i32(), hooks).abi_encode();

    keccak256(&encoded)
}
