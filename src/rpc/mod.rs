//! Node access for the scan.
//!
//! The pipeline only needs three JSON-RPC primitives, so it talks to a
//! [`ChainReader`] instead of a concrete provider. [`DynProvider`] is the
//! production implementation; tests use an in-memory node.

use std::future::Future;

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::{Filter, Log, TransactionRequest},
};
use anyhow::Context;
use log::info;
use url::Url;

use crate::error::ScanError;

pub trait ChainReader {
    /// `eth_getLogs`
    fn get_logs(&self, filter: &Filter) -> impl Future<Output = anyhow::Result<Vec<Log>>> + Send;

    /// `eth_blockNumber`
    fn block_number(&self) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// `eth_call` against the latest block
    fn call(&self, to: Address, input: Bytes) -> impl Future<Output = anyhow::Result<Bytes>> + Send;
}

impl ChainReader for DynProvider {
    async fn get_logs(&self, filter: &Filter) -> anyhow::Result<Vec<Log>> {
        Ok(Provider::get_logs(self, filter).await?)
    }

    async fn block_number(&self) -> anyhow::Result<u64> {
        Ok(self.get_block_number().await?)
    }

    async fn call(&self, to: Address, input: Bytes) -> anyhow::Result<Bytes> {
        let tx = TransactionRequest::default().with_to(to).with_input(input);
        Ok(Provider::call(self, tx).await?)
    }
}

/// Build an HTTP provider for `rpc_url` and make sure the node answers.
///
/// The probe (`eth_chainId`) makes an unreachable endpoint fail here, before
/// any log query is attempted.
pub async fn connect(rpc_url: &str) -> Result<DynProvider, ScanError> {
    let connection_error = |source: anyhow::Error| ScanError::Connection {
        url: rpc_url.to_string(),
        source,
    };

    let url = Url::parse(rpc_url)
        .context("Invalid RPC URL")
        .map_err(connection_error)?;

    let provider = DynProvider::new(ProviderBuilder::new().connect_http(url));

    let chain_id = provider
        .get_chain_id()
        .await
        .context("eth_chainId probe failed")
        .map_err(connection_error)?;

    info!("Connected to {} (chain id {})", rpc_url, chain_id);

    Ok(provider)
}
