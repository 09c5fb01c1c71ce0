use alloy::{
    primitives::{Address, B256},
    sol_types::SolCall,
};
use anyhow::Context;

use crate::{
    abis::IStateView,
    error::{Result, ScanError},
    models::Slot0Result,
    rpc::ChainReader,
};

/// Read the current slot0 of `pool_id` through `StateView.getSlot0`.
///
/// Transport failures, reverts and undecodable return data all surface as
/// [`ScanError::Call`].
pub async fn fetch_slot0<R: ChainReader>(
    reader: &R,
    state_view: Address,
    pool_id: B256,
) -> Result<Slot0Result> {
    let call_error = |source: anyhow::Error| ScanError::Call { pool_id, source };

    let input = IStateView::getSlot0Call { poolId: pool_id }.abi_encode();

    let output = reader
        .call(state_view, input.into())
        .await
        .map_err(call_error)?;

    let ret = IStateView::getSlot0Call::abi_decode_returns_validate(&output)
        .with_context(|| format!("undecodable getSlot0 return data ({} bytes)", output.len()))
        .map_err(call_error)?;

    Ok(Slot0Result::from(ret))
}
