//! Decoding of PoolManager `Initialize` logs.

use alloy::{rpc::types::Log, sol_types::SolEvent};
use log::warn;

use crate::{
    abis::v4,
    error::{Result, ScanError},
    models::InitializeEvent,
    utils::compute_v4_pool_id,
};

/// Decode one raw log into an [`InitializeEvent`].
///
/// Indexed fields are read from topics 1..=3 and the rest from the data
/// payload. Logs with another topic0, the wrong number of topics or a
/// malformed payload yield [`ScanError::Decode`]. Payload words must fit their
/// declared types; dirty high bits are rejected rather than masked.
pub fn decode_initialize(log: &Log) -> Result<InitializeEvent> {
    let decode_error = |reason: String| ScanError::Decode {
        log_index: log.log_index,
        tx_hash: log.transaction_hash,
        reason,
    };

    let topics = log.topics();
    match topics.first() {
        Some(topic0) if *topic0 == v4::Initialize::SIGNATURE_HASH => {},
        Some(topic0) => return Err(decode_error(format!("unexpected topic0 {topic0:#x}"))),
        None => return Err(decode_error("log has no topics".to_string())),
    }

    // topic0 + id + currency0 + currency1
    if topics.len() != 4 {
        return Err(decode_error(format!("expected 4 topics, got {}", topics.len())));
    }

    let event = v4::Initialize::decode_log_data_validate(&log.inner.data)
        .map_err(|e| decode_error(e.to_string()))?;
    let event = InitializeEvent::from(event);

    let computed_pool_id = compute_v4_pool_id(
        event.currency0,
        event.currency1,
        event.fee,
        event.tick_spacing,
        event.hooks,
    );
    if computed_pool_id != event.pool_id {
        warn!(
            "V4 Initialize: Pool ID mismatch! Event ID: {:#x}, Computed: {:#x}",
            event.pool_id, computed_pool_id
        );
    }

    Ok(event)
}
