use alloy::primitives::aliases::{I24, U160, U24};

use crate::abis::IStateView;

/// Current price state of a pool as returned by `StateView.getSlot0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot0Result {
    pub sqrt_price_x96: U160,
    pub tick: I24,
    pub protocol_fee: U24,
    pub lp_fee: U24,
}

impl From<IStateView::getSlot0Return> for Slot0Result {
    fn from(ret: IStateView::getSlot0Return) -> Self {
        Self {
            sqrt_price_x96: ret.sqrtPriceX96,
            tick: ret.tick,
            protocol_fee: ret.protocolFee,
            lp_fee: ret.lpFee,
        }
    }
}
