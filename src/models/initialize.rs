use alloy::{
    primitives::{
        aliases::{I24, U160, U24},
        Address, B256,
    },
    sol_types::SolEvent,
};

use crate::abis::v4;

/// A pool created on the PoolManager, as announced by its `Initialize` log.
///
/// `pool_id`, `currency0` and `currency1` are the indexed fields (topics 1..=3);
/// everything else comes from the log data in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeEvent {
    pub pool_id: B256,
    pub currency0: Address,
    pub currency1: Address,
    pub fee: U24,
    pub tick_spacing: I24,
    pub hooks: Address,
    pub sqrt_price_x96: U160,
    pub tick: I24,
}

impl InitializeEvent {
    /// ABI-encode the non-indexed fields, reproducing the log's data payload.
    pub fn encode_data(&self) -> Vec<u8> {
        v4::Initialize::from(self).encode_data()
    }
}

impl From<v4::Initialize> for InitializeEvent {
    fn from(event: v4::Initialize) -> Self {
        Self {
            pool_id: event.id,
            currency0: event.currency0,
            currency1: event.currency1,
            fee: event.fee,
            tick_spacing: event.tickSpacing,
            hooks: event.hooks,
            sqrt_price_x96: event.sqrtPriceX96,
            tick: event.tick,
        }
    }
}

impl From<&InitializeEvent> for v4::Initialize {
    fn from(event: &InitializeEvent) -> Self {
        Self {
            id: event.pool_id,
            currency0: event.currency0,
            currency1: event.currency1,
            fee: event.fee,
            tickSpacing: event.tick_spacing,
            hooks: event.hooks,
            sqrtPriceX96: event.sqrt_price_x96,
            tick: event.tick,
        }
    }
}
