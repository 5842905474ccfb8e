// Ports define what the cart needs from the outside world, without implementing it.
//
// Purpose
// - Describe the catalog, stock and snapshot capabilities as traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - In memory implementations live in adapters::in_memory.

use crate::core::cart::product::{CatalogProduct, ProductId, StockEntry};
use crate::core::cart::state::Cart;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(String),

    #[error("snapshot is corrupt: {0}")]
    Corrupt(String),

    #[error("snapshot could not be encoded: {0}")]
    Encode(String),

    #[error("snapshot store offline")]
    Offline,
}

/// `Ok(None)` means the catalog has no such product.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<CatalogProduct>, BackendError>;
}

/// `Ok(None)` means no stock information exists; callers treat that as a hard failure.
#[async_trait]
pub trait StockChecker: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<Option<StockEntry>, BackendError>;
}

/// A single named snapshot entry. Every save overwrites the previous one.
#[async_trait]
pub trait CartSnapshotStore: Send + Sync {
    async fn load(&self) -> Result<Option<Cart>, SnapshotError>;
    async fn save(&self, cart: &Cart) -> Result<(), SnapshotError>;
}
