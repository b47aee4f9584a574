// src/blockchain/nonce_manager.rs

use dashmap::DashMap;
use ethers::types::{Address, U256};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Senders idle for longer than this are forgotten; by then the node's
/// transaction count has caught up with anything sent through us.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(600);

// Serializes transfers per sender so concurrent calls do not reuse a nonce.
#[derive(Debug, Clone, Default)]
pub struct NonceManager {
    // One lock per sender. The map itself is shared between clones.
    nonces: Arc<DashMap<Address, Arc<Mutex<NonceState>>>>,
}

#[derive(Debug)]
pub struct NonceState {
    last_used: Option<U256>,
    touched: Instant,
}

impl Default for NonceState {
    fn default() -> Self {
        Self {
            last_used: None,
            touched: Instant::now(),
        }
    }
}

/// Exclusive access to one sender's nonce until dropped.
pub type NonceGuard = OwnedMutexGuard<NonceState>;

impl NonceState {
    /// Picks the nonce for the next transfer given the node's transaction
    /// count. A locally used nonce wins only while the node lags behind it.
    pub fn reserve(&self, on_chain: U256) -> U256 {
        match self.last_used {
            Some(last) if last + U256::one() > on_chain => last + U256::one(),
            _ => on_chain,
        }
    }

    /// Records a nonce whose transaction the node accepted.
    pub fn confirm(&mut self, nonce: U256) {
        self.last_used = Some(nonce);
        self.touched = Instant::now();
    }
}

impl NonceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the nonce state of `address`. Hold the guard across fetch, sign
    /// and broadcast.
    pub async fn lock(&self, address: Address) -> NonceGuard {
        self.prune_idle(IDLE_TIMEOUT);

        let address_lock = self
            .nonces
            .entry(address)
            .or_insert_with(|| Arc::new(Mutex::new(NonceState::default())))
            .clone();

        address_lock.lock_owned().await
    }

    /// Drops senders nobody holds or waits on that were last used more than
    /// `max_idle` ago.
    pub fn prune_idle(&self, max_idle: Duration) {
        // Cloning an entry happens under the shard lock, so a count of 1 here
        // means no guard or waiter exists.
        self.nonces.retain(|_, lock| {
            Arc::strong_count(lock) > 1
                || lock
                    .try_lock()
                    .map_or(true, |state| state.touched.elapsed() < max_idle)
        });
    }

    pub fn tracked_senders(&self) -> usize {
        self.nonces.len()
    }
}
