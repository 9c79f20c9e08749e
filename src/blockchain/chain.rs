//! Chain descriptor derivation and caching.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::blockchain::types::{BlockchainResult, ChainId};
use crate::blockchain::wallet::WalletClient;
use crate::config::{ChainConfig, NativeCurrencyConfig};

/// Parameters describing the network a client targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDescriptor {
    pub id: ChainId,
    pub name: String,
    pub native_currency: NativeCurrencyConfig,
    pub rpc_url: String,
}

impl ChainDescriptor {
    /// Combine a queried chain id with the configured metadata.
    pub fn define(id: ChainId, config: &ChainConfig) -> Self {
        Self {
            id,
            name: config.name.clone(),
            native_currency: config.native_currency.clone(),
            rpc_url: config.rpc_url.clone(),
        }
    }
}

/// Holds the last derived descriptor until a provider notification says
/// the chain or accounts changed.
#[derive(Debug, Default)]
pub struct ChainCache {
    current: ArcSwapOption<ChainDescriptor>,
}

impl ChainCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached descriptor, if any.
    pub fn get(&self) -> Option<Arc<ChainDescriptor>> {
        self.current.load_full()
    }

    /// Return the cached descriptor or query the chain id and derive one.
    pub async fn resolve(
        &self,
        client: &WalletClient,
        config: &ChainConfig,
    ) -> BlockchainResult<Arc<ChainDescriptor>> {
        if let Some(descriptor) = self.get() {
            return Ok(descriptor);
        }

        let chain_id = client.get_chain_id().await?;
        let descriptor = Arc::new(ChainDescriptor::define(chain_id, config));
        tracing::debug!(chain_id = %chain_id, name = %descriptor.name, "Chain descriptor derived");
        self.current.store(Some(descriptor.clone()));
        Ok(descriptor)
    }

    /// Drop the cached descriptor.
    pub fn invalidate(&self) {
        if self.current.swap(None).is_some() {
            tracing::debug!("Chain descriptor invalidated");
        }
    }
}
