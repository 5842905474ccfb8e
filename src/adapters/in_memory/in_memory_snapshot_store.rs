// In memory implementation of the CartSnapshotStore port.
//
// Purpose
// - Support cart store tests and local development without touching the disk.
//
// Responsibilities
// - Hold the last saved cart. Each save overwrites it.
// - Count saves so tests can assert whether an operation persisted.

use crate::core::cart::state::Cart;
use crate::core::ports::{CartSnapshotStore, SnapshotError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySnapshotStore {
    snapshot: RwLock<Option<Cart>>,
    saves: AtomicUsize,
    offline: AtomicBool,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(cart: Cart) -> Self {
        Self {
            snapshot: RwLock::new(Some(cart)),
            ..Self::default()
        }
    }

    pub async fn snapshot(&self) -> Option<Cart> {
        self.snapshot.read().await.clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), SnapshotError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SnapshotError::Offline);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CartSnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<Option<Cart>, SnapshotError> {
        self.ensure_online()?;
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, cart: &Cart) -> Result<(), SnapshotError> {
        self.ensure_online()?;
        *self.snapshot.write().await = Some(cart.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
