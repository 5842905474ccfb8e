use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// Catalog data as served by `GET /products/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
}

/// A cart line: catalog data plus the quantity the shopper selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub image: String,
    pub amount: u32,
}

impl Product {
    /// Start a line for a product that is not in the cart yet. The amount is
    /// zero until a decision increments it.
    pub fn from_catalog(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 0,
        }
    }

    /// `None` when `price * amount` does not fit in a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.amount))
    }
}

/// Available quantity as served by `GET /stock/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: ProductId,
    pub amount: u32,
}
