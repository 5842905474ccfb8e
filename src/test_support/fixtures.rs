// Shared test fixtures for cart lines, catalog products and stock entries.
// Catalog data is read from fixtures/products.json so tests share one source.

use crate::core::cart::product::{CatalogProduct, Product, ProductId, StockEntry};
use rust_decimal::Decimal;

const PRODUCTS_JSON: &str = include_str!("fixtures/products.json");

/// Catalog product from the JSON fixture, or a synthetic one for ids it lacks.
pub fn catalog_product(id: ProductId) -> CatalogProduct {
    let products: Vec<CatalogProduct> = serde_json::from_str(PRODUCTS_JSON).unwrap();
    products
        .into_iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| CatalogProduct {
            id,
            title: format!("Product {id}"),
            price: Decimal::new(999, 1),
            image: format!("https://cdn.example.com/products/{id}.jpg"),
        })
}

pub fn stock(id: ProductId, amount: u32) -> StockEntry {
    StockEntry { id, amount }
}

pub struct ProductBuilder {
    inner: Product,
}

#[allow(dead_code)]
impl ProductBuilder {
    /// Cart line for `id` at amount one.
    pub fn new(id: ProductId) -> Self {
        let mut inner = Product::from_catalog(catalog_product(id));
        inner.amount = 1;
        Self { inner }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn price(mut self, v: Decimal) -> Self {
        self.inner.price = v;
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.inner.image = v.into();
        self
    }

    pub fn amount(mut self, v: u32) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }
}
