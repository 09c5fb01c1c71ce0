use alloy::sol;

sol! {
    /// Emitted by the PoolManager when a pool is created and its starting price is set.
    event Initialize(bytes32 indexed id, address indexed currency0, address indexed currency1, uint24 fee, int24 tickSpacing, address hooks, uint160 sqrtPriceX96, int24 tick);
}
