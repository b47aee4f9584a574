//! Node gateway for a single EVM JSON-RPC endpoint.
//!
//! Every operation is one linear sequence of node calls. Nothing is cached,
//! retried or rolled back; a failure aborts the rest of that operation only.

use std::sync::Arc;

use anyhow::{Context, Result};
use ethers::{
    providers::{Http, Middleware, Provider},
    signers::Signer,
};
use secrecy::SecretString;
use tracing::{debug, info, warn};

use crate::blockchain::{
    models::{Balance, GasPrice, GatewayError, GatewayResult, NetworkSummary, TransferReceipt},
    nonce_manager::NonceManager,
    services::{address, transactions, units},
};
use crate::config::Config;

/// Shared handle on the configured node.
///
/// Cheap to clone; all clones share the same provider and nonce state.
#[derive(Clone, Debug)]
pub struct NodeGateway {
    provider: Arc<Provider<Http>>,
    network: String,
    /// `None` when local nonce sequencing is disabled.
    nonce_manager: Option<NonceManager>,
}

impl NodeGateway {
    /// Create a gateway from the loaded configuration. Does not touch the network.
    pub fn new(config: &Config) -> Result<Self> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .with_context(|| format!("Invalid RPC URL: {}", config.redacted_rpc_url()))?;

        Ok(Self {
            provider: Arc::new(provider),
            network: config.network_name.clone(),
            nonce_manager: config.nonce_tracking.then(NonceManager::new),
        })
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    /// True when the node answers `web3_clientVersion`.
    pub async fn is_connected(&self) -> bool {
        match self.provider.client_version().await {
            Ok(version) => {
                debug!("Connected to node: {}", version);
                true
            }
            Err(e) => {
                warn!("Node connectivity check failed: {}", e);
                false
            }
        }
    }

    /// Native balance of `address`, in any casing.
    pub async fn get_balance(&self, address: &str) -> GatewayResult<Balance> {
        let address = address::normalize_address(address)?;
        debug!("Fetching balance for {:?}", address);

        let wei = self.provider.get_balance(address, None).await?;
        Ok(Balance { address, wei })
    }

    pub async fn get_block_number(&self) -> GatewayResult<u64> {
        Ok(self.provider.get_block_number().await?.as_u64())
    }

    pub async fn get_gas_price(&self) -> GatewayResult<GasPrice> {
        let wei = self.provider.get_gas_price().await?;
        Ok(GasPrice { wei })
    }

    pub async fn get_chain_id(&self) -> GatewayResult<u64> {
        Ok(self.provider.get_chainid().await?.low_u64())
    }

    /// Chain id, head block, gas price and connectivity in one result.
    pub async fn get_network_summary(&self) -> GatewayResult<NetworkSummary> {
        let (chain_id, block_number, gas_price) = tokio::try_join!(
            self.get_chain_id(),
            self.get_block_number(),
            self.get_gas_price(),
        )?;

        Ok(NetworkSummary {
            network: self.network.clone(),
            chain_id,
            block_number,
            gas_price: gas_price.to_string(),
            is_connected: self.is_connected().await,
        })
    }

    /// Signs and broadcasts a plain value transfer of `amount_eth` ether.
    ///
    /// Returns as soon as the node accepts the payload; the transaction is not
    /// awaited. The gas limit is fixed at 21000, so sending to a contract
    /// fails at the node.
    pub async fn send_transfer(
        &self,
        private_key: &SecretString,
        to_address: &str,
        amount_eth: f64,
    ) -> GatewayResult<TransferReceipt> {
        let wallet = transactions::load_wallet(private_key)?;
        let from = wallet.address();
        let to = address::normalize_address(to_address)?;
        let value = units::parse_ether(amount_eth)?;

        let mut sequencer = match &self.nonce_manager {
            Some(manager) => Some(manager.lock(from).await),
            None => None,
        };

        let on_chain = self.provider.get_transaction_count(from, None).await?;
        let nonce = sequencer
            .as_deref()
            .map_or(on_chain, |state| state.reserve(on_chain));

        let gas_price = self.provider.get_gas_price().await?;
        let chain_id = self.get_chain_id().await?;

        let tx = transactions::build_transfer(from, to, value, nonce, gas_price, chain_id);
        let raw_tx = transactions::sign_transfer(&wallet, &tx)?;

        info!(
            "Broadcasting transfer of {} ETH from {:?} to {:?} (nonce {}, chain {})",
            units::format_ether(value),
            from,
            to,
            nonce,
            chain_id
        );

        let pending = self
            .provider
            .send_raw_transaction(raw_tx)
            .await
            .map_err(GatewayError::from_submission)?;
        let tx_hash = *pending;

        if let Some(state) = sequencer.as_deref_mut() {
            state.confirm(nonce);
        }

        info!("Transfer broadcast: {:?}", tx_hash);
        Ok(TransferReceipt {
            tx_hash,
            from,
            to,
            nonce,
            value,
        })
    }
}
