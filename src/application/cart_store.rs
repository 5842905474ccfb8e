// Cart store orchestrates every cart mutation.
//
// Responsibilities
// - Rehydrate the cart from the snapshot store at startup.
// - Fetch catalog and stock data, call the decider, persist accepted carts.
// - Replace the in-memory cart only after the snapshot was written.
//
// Mutations take `&mut self`, so one store instance never runs two of them at once.

use crate::application::errors::CartError;
use crate::application::queries::cart_view::CartView;
use crate::core::cart::decide::{
    Decision, UpdateProductAmount, decide_add, decide_remove, decide_update,
};
use crate::core::cart::product::{Product, ProductId};
use crate::core::cart::state::Cart;
use crate::core::ports::{CartSnapshotStore, ProductCatalog, StockChecker};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Store wired against trait objects, as used by the shell.
pub type DynCartStore = CartStore<dyn ProductCatalog, dyn StockChecker, dyn CartSnapshotStore>;

pub struct CartStore<TCatalog, TStock, TSnapshots>
where
    TCatalog: ProductCatalog + ?Sized,
    TStock: StockChecker + ?Sized,
    TSnapshots: CartSnapshotStore + ?Sized,
{
    catalog: Arc<TCatalog>,
    stock: Arc<TStock>,
    snapshots: Arc<TSnapshots>,
    cart: Cart,
}

impl<TCatalog, TStock, TSnapshots> CartStore<TCatalog, TStock, TSnapshots>
where
    TCatalog: ProductCatalog + ?Sized,
    TStock: StockChecker + ?Sized,
    TSnapshots: CartSnapshotStore + ?Sized,
{
    /// Build a store from the last persisted snapshot, or an empty cart when
    /// nothing was saved yet.
    pub async fn load(
        catalog: Arc<TCatalog>,
        stock: Arc<TStock>,
        snapshots: Arc<TSnapshots>,
    ) -> Result<Self, CartError> {
        let cart = snapshots.load().await?.unwrap_or_default();
        info!(lines = cart.len(), "cart rehydrated");
        Ok(Self {
            catalog,
            stock,
            snapshots,
            cart,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    #[tracing::instrument(skip(self))]
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let line = match self.cart.find(product_id) {
            Some(existing) => existing.clone(),
            None => {
                debug!("product not in cart, fetching catalog data");
                let product = self
                    .catalog
                    .get_product(product_id)
                    .await?
                    .ok_or(CartError::UnavailableProduct(product_id))?;
                Product::from_catalog(product)
            }
        };
        let stock = self.stock.get_stock(product_id).await?;
        let decision = decide_add(&self.cart, line, stock);
        self.apply(decision).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_product(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let decision = decide_remove(&self.cart, product_id);
        self.apply(decision).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_product_amount(
        &mut self,
        command: UpdateProductAmount,
    ) -> Result<(), CartError> {
        if command.is_noop() {
            debug!("non-positive amount, nothing to do");
            return Ok(());
        }
        let stock = self.stock.get_stock(command.product_id).await?;
        let decision = decide_update(&self.cart, command, stock);
        self.apply(decision).await
    }

    async fn apply(&mut self, decision: Decision) -> Result<(), CartError> {
        match decision {
            Decision::Accepted { cart } => {
                self.snapshots.save(&cart).await?;
                info!(lines = cart.len(), "cart updated");
                self.cart = cart;
                Ok(())
            }
            Decision::Unchanged => Ok(()),
            Decision::Rejected { reason } => {
                warn!(%reason, "cart operation rejected");
                Err(reason.into())
            }
        }
    }
}
