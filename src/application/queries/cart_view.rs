// Read model for the presentation layer.
//
// Responsibilities
// - Derive per-line subtotals, the cart total and their formatted forms from the cart.
// - Never mutate the cart.

use crate::application::queries::price_format::format_price;
use crate::core::cart::product::{Product, ProductId};
use crate::core::cart::state::Cart;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub amount: u32,
    pub price: Decimal,
    pub price_formatted: String,
    pub subtotal: Decimal,
    pub subtotal_formatted: String,
    pub can_decrement: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: Decimal,
    pub total_formatted: String,
}

impl From<&Product> for CartLineView {
    fn from(product: &Product) -> Self {
        let subtotal = product.subtotal().unwrap_or(Decimal::MAX);
        Self {
            id: product.id,
            title: product.title.clone(),
            image: product.image.clone(),
            amount: product.amount,
            price: product.price,
            price_formatted: format_price(product.price),
            subtotal,
            subtotal_formatted: format_price(subtotal),
            can_decrement: product.amount > 1,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        // A `Cart` only holds lines whose total is representable.
        let total = cart.total().unwrap_or(Decimal::MAX);
        let items: Vec<CartLineView> = cart.items().iter().map(CartLineView::from).collect();
        Self {
            items,
            total,
            total_formatted: format_price(total),
        }
    }
}
