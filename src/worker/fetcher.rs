use alloy::{
    primitives::Address,
    rpc::types::{Filter, Log},
    sol_types::SolEvent,
};
use log::info;

use crate::{
    abis::v4,
    config::BlockRange,
    error::{Result, ScanError},
    rpc::ChainReader,
};

/// Filter matching `Initialize` logs emitted by `pool_manager`.
pub fn initialize_filter(pool_manager: Address) -> Filter {
    Filter::new()
        .address(pool_manager)
        .event_signature(v4::Initialize::SIGNATURE_HASH)
}

/// Fetch every `Initialize` log of the PoolManager in node order.
///
/// [`BlockRange::Unbounded`] issues a single query with no block bounds.
/// [`BlockRange::Paged`] walks the range in ascending windows and
/// concatenates the results. Any failure aborts the fetch; partial results
/// are dropped.
pub async fn fetch_initialize_logs<R: ChainReader>(
    reader: &R,
    pool_manager: Address,
    range: BlockRange,
) -> Result<Vec<Log>> {
    let filter = initialize_filter(pool_manager);

    match range {
        BlockRange::Unbounded => reader.get_logs(&filter).await.map_err(ScanError::Fetch),
        BlockRange::Paged {
            from,
            to,
            chunk_size,
        } => {
            let to = match to {
                Some(to) => to,
                None => reader.block_number().await.map_err(ScanError::Fetch)?,
            };

            if from > to {
                return Err(ScanError::Fetch(anyhow::anyhow!(
                    "from_block {from} is above the chain head {to}"
                )));
            }

            let windows = block_windows(from, to, chunk_size);
            info!(
                "Querying Initialize logs over blocks {}..={} in {} windows",
                from,
                to,
                windows.len()
            );

            let mut logs = Vec::new();
            for (start, end) in windows {
                let window_filter = filter.clone().from_block(start).to_block(end);
                let batch = reader
                    .get_logs(&window_filter)
                    .await
                    .map_err(|e| ScanError::Fetch(e.context(format!("blocks {start}..={end}"))))?;
                logs.extend(batch);
            }

            Ok(logs)
        },
    }
}

/// Split `[from, to]` into consecutive inclusive windows of at most `chunk_size` blocks.
pub fn block_windows(from: u64, to: u64, chunk_size: u64) -> Vec<(u64, u64)> {
    let mut windows = Vec::new();
    if from > to || chunk_size == 0 {
        return windows;
    }

    let mut start = from;
    loop {
        let end = start.saturating_add(chunk_size - 1).min(to);
        windows.push((start, end));
        if end == to {
            break;
        }
        start = end + 1;
    }

    windows
}
