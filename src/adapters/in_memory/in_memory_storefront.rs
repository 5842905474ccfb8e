// In memory implementation of the ProductCatalog and StockChecker ports.
//
// Purpose
// - Support cart store tests and local development without the storefront API.
//
// Responsibilities
// - Serve catalog data and stock per product id.
// - Simulate an unreachable backend when toggled offline.

use crate::core::cart::product::{CatalogProduct, ProductId, StockEntry};
use crate::core::ports::{BackendError, ProductCatalog, StockChecker};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStorefront {
    products: RwLock<HashMap<ProductId, CatalogProduct>>,
    stock: RwLock<HashMap<ProductId, StockEntry>>,
    offline: AtomicBool,
}

impl InMemoryStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: CatalogProduct, available: u32) -> Self {
        let id = product.id;
        self.stock.get_mut().insert(
            id,
            StockEntry {
                id,
                amount: available,
            },
        );
        self.with_catalog_only(product)
    }

    /// Register catalog data without any stock entry.
    pub fn with_catalog_only(mut self, product: CatalogProduct) -> Self {
        self.products.get_mut().insert(product.id, product);
        self
    }

    pub async fn set_stock(&self, product_id: ProductId, available: u32) {
        self.stock.write().await.insert(
            product_id,
            StockEntry {
                id: product_id,
                amount: available,
            },
        );
    }

    pub async fn remove_from_catalog(&self, product_id: ProductId) {
        self.products.write().await.remove(&product_id);
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), BackendError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(BackendError::Transport("storefront offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductCatalog for InMemoryStorefront {
    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<CatalogProduct>, BackendError> {
        self.ensure_online()?;
        Ok(self.products.read().await.get(&product_id).cloned())
    }
}

#[async_trait::async_trait]
impl StockChecker for InMemoryStorefront {
    async fn get_stock(&self, product_id: ProductId) -> Result<Option<StockEntry>, BackendError> {
        self.ensure_online()?;
        Ok(self.stock.read().await.get(&product_id).copied())
    }
}
