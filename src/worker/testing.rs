//! In-memory node and log fixtures shared by the worker tests.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use alloy::{
    primitives::{
        address,
        aliases::{I24, U160, U24},
        Address, Bytes, B256,
    },
    rpc::types::{Filter, Log},
    sol_types::{sol_data, SolEvent, SolType},
};

use crate::{abis::v4, models::InitializeEvent, rpc::ChainReader, utils::compute_v4_pool_id};

pub const POOL_MANAGER: Address = address!("360E68faCcca8cA495c1B759Fd9EEe466db9FB32");
pub const STATE_VIEW: Address = address!("76fd297e2d437cd7f76d50f01afe6160f86e9990");
pub const CURRENCY0: Address = address!("82af49447d8a07e3bd95bd0d56f35241523fbab1");
pub const CURRENCY1: Address = address!("af88d065e77c8cc2239327c5edb3a432268e5831");

/// 2^96, i.e. a price of 1.0
pub fn q96() -> U160 {
    U160::from(1u128 << 96)
}

pub fn pool_id(n: u8) -> B256 {
    B256::repeat_byte(n)
}

/// fee 3000, tick spacing 60, no hooks, price 1.0, tick 0
pub fn initialize_event(pool_id: B256) -> InitializeEvent {
    InitializeEvent {
        pool_id,
        currency0: CURRENCY0,
        currency1: CURRENCY1,
        fee: U24::from(3000),
        tick_spacing: I24::try_from(60).unwrap(),
        hooks: Address::ZERO,
        sqrt_price_x96: q96(),
        tick: I24::ZERO,
    }
}

pub fn log_for(event: &InitializeEvent, block_number: u64) -> Log {
    Log {
        inner: alloy::primitives::Log {
            address: POOL_MANAGER,
            data: v4::Initialize::from(event).encode_log_data(),
        },
        block_number: Some(block_number),
        ..Default::default()
    }
}

pub fn initialize_log(pool_id: B256, block_number: u64) -> Log {
    log_for(&initialize_event(pool_id), block_number)
}

/// Initialize log whose topic pool id is the real hash of its key.
pub fn keyed_initialize_log(block_number: u64) -> Log {
    let mut event = initialize_event(B256::ZERO);
    event.pool_id = compute_v4_pool_id(
        event.currency0,
        event.currency1,
        event.fee,
        event.tick_spacing,
        event.hooks,
    );
    log_for(&event, block_number)
}

/// ABI-encoded `getSlot0` return data.
pub fn slot0_return(sqrt_price_x96: U160, tick: i32, protocol_fee: u32, lp_fee: u32) -> Bytes {
    type Slot0Tuple = (
        sol_data::Uint<160>,
        sol_data::Int<24>,
        sol_data::Uint<24>,
        sol_data::Uint<24>,
    );

    Slot0Tuple::abi_encode_params(&(
        sqrt_price_x96,
        I24::try_from(tick).unwrap(),
        U24::from(protocol_fee),
        U24::from(lp_fee),
    ))
    .into()
}

enum Slot0Response {
    Data(Bytes),
    Revert,
}

/// Answers `eth_getLogs` from a fixed log set and `eth_call` from per-pool responses.
pub struct MockNode {
    logs: Vec<Log>,
    head: u64,
    fail_logs: bool,
    slot0: HashMap<B256, Slot0Response>,
    delays: HashMap<B256, Duration>,
    filters: Mutex<Vec<Filter>>,
    calls: Mutex<Vec<(Address, Bytes)>>,
    block_number_calls: AtomicUsize,
}

impl MockNode {
    pub fn new(logs: Vec<Log>) -> Self {
        Self {
            logs,
            head: 0,
            fail_logs: false,
            slot0: HashMap::new(),
            delays: HashMap::new(),
            filters: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
            block_number_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_head(mut self, head: u64) -> Self {
        self.head = head;
        self
    }

    pub fn failing_logs(mut self) -> Self {
        self.fail_logs = true;
        self
    }

    pub fn with_slot0(mut self, pool_id: B256, data: Bytes) -> Self {
        self.slot0.insert(pool_id, Slot0Response::Data(data));
        self
    }

    pub fn with_revert(mut self, pool_id: B256) -> Self {
        self.slot0.insert(pool_id, Slot0Response::Revert);
        self
    }

    pub fn with_delay(mut self, pool_id: B256, millis: u64) -> Self {
        self.delays.insert(pool_id, Duration::from_millis(millis));
        self
    }

    pub fn filters(&self) -> Vec<Filter> {
        self.filters.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<(Address, Bytes)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn block_number_calls(&self) -> usize {
        self.block_number_calls.load(Ordering::SeqCst)
    }
}

impl ChainReader for MockNode {
    async fn get_logs(&self, filter: &Filter) -> anyhow::Result<Vec<Log>> {
        self.filters.lock().unwrap().push(filter.clone());

        if self.fail_logs {
            anyhow::bail!("query returned more than 10000 results");
        }

        let from = filter.get_from_block().unwrap_or(0);
        let to = filter.get_to_block().unwrap_or(u64::MAX);

        Ok(self
            .logs
            .iter()
            .filter(|log| {
                let block = log.block_number.unwrap_or(0);
                block >= from && block <= to
            })
            .cloned()
            .collect())
    }

    async fn block_number(&self) -> anyhow::Result<u64> {
        self.block_number_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.head)
    }

    async fn call(&self, to: Address, input: Bytes) -> anyhow::Result<Bytes> {
        self.calls.lock().unwrap().push((to, input.clone()));

        let pool_id = B256::from_slice(input.get(4..36).unwrap_or(&[0u8; 32]));

        if let Some(delay) = self.delays.get(&pool_id) {
            tokio::time::sleep(*delay).await;
        }

        match self.slot0.get(&pool_id) {
            Some(Slot0Response::Data(data)) => Ok(data.clone()),
            Some(Slot0Response::Revert) => anyhow::bail!("execution reverted"),
            None => anyhow::bail!("no slot0 response for pool {pool_id:#x}"),
        }
    }
}
