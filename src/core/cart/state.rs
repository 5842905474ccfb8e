use crate::core::cart::product::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCart {
    #[error("product {0} appears more than once")]
    DuplicateProduct(ProductId),

    #[error("product {0} has an amount of zero")]
    EmptyLine(ProductId),

    #[error("the cart total overflows at product {0}")]
    TotalOverflow(ProductId),
}

/// Ordered cart lines, unique by product id, every amount at least one, with
/// a total that fits in a `Decimal`.
///
/// Serializes as the bare list of lines. Deserializing re-checks the
/// invariants so a tampered snapshot cannot produce an invalid cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|p| p.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the line subtotals, `None` on overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.subtotal()?))
    }

    /// Replace the line for `line.id` and move it to the end.
    /// Callers guarantee `line.amount >= 1`.
    pub(crate) fn with_line(&self, line: Product) -> Cart {
        debug_assert!(line.amount >= 1);
        let mut items: Vec<Product> = self
            .items
            .iter()
            .filter(|p| p.id != line.id)
            .cloned()
            .collect();
        items.push(line);
        Cart { items }
    }

    pub(crate) fn without(&self, product_id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|p| p.id != product_id)
                .cloned()
                .collect(),
        }
    }
}

impl TryFrom<Vec<Product>> for Cart {
    type Error = InvalidCart;

    fn try_from(items: Vec<Product>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        let mut total = Decimal::ZERO;
        for item in &items {
            if item.amount == 0 {
                return Err(InvalidCart::EmptyLine(item.id));
            }
            if !seen.insert(item.id) {
                return Err(InvalidCart::DuplicateProduct(item.id));
            }
            total = item
                .subtotal()
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or(InvalidCart::TotalOverflow(item.id))?;
        }
        Ok(Cart { items })
    }
}

impl From<Cart> for Vec<Product> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}
