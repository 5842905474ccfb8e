// Pure decision functions for cart mutations.
//
// Responsibilities
// - Given the current cart and the data fetched for the operation, compute the next cart
//   or the reason the operation is rejected.
// - No input or output. The cart store fetches, decides, then persists.

use crate::core::cart::product::{Product, ProductId, StockEntry};
use crate::core::cart::state::Cart;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("no stock information for product {product_id}")]
    Unavailable { product_id: ProductId },

    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    Insufficient {
        product_id: ProductId,
        requested: i64,
        available: u32,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecideError {
    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("the cart total overflows with product {0}")]
    PriceOverflow(ProductId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted { cart: Cart },
    Unchanged,
    Rejected { reason: DecideError },
}

impl Decision {
    fn rejected(reason: impl Into<DecideError>) -> Self {
        Decision::Rejected {
            reason: reason.into(),
        }
    }

    /// Accept `next` only if its total is representable.
    fn accepted(next: Cart, product_id: ProductId) -> Self {
        match next.total() {
            Some(_) => Decision::Accepted { cart: next },
            None => Decision::rejected(DecideError::PriceOverflow(product_id)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn is_noop(&self) -> bool {
        self.amount <= 0
    }
}

/// Increment `line` by one, where `line` is the existing cart line or a fresh
/// catalog line at amount zero.
pub fn decide_add(cart: &Cart, mut line: Product, stock: Option<StockEntry>) -> Decision {
    let Some(stock) = stock else {
        return Decision::rejected(StockError::Unavailable {
            product_id: line.id,
        });
    };
    if line.amount >= stock.amount {
        return Decision::rejected(StockError::Insufficient {
            product_id: line.id,
            requested: i64::from(line.amount) + 1,
            available: stock.amount,
        });
    }
    line.amount += 1;
    let product_id = line.id;
    Decision::accepted(cart.with_line(line), product_id)
}

/// Removing an absent id still yields an accepted (identical) cart so the
/// snapshot is rewritten either way.
pub fn decide_remove(cart: &Cart, product_id: ProductId) -> Decision {
    Decision::Accepted {
        cart: cart.without(product_id),
    }
}

pub fn decide_update(
    cart: &Cart,
    command: UpdateProductAmount,
    stock: Option<StockEntry>,
) -> Decision {
    if command.is_noop() {
        return Decision::Unchanged;
    }
    let Some(stock) = stock else {
        return Decision::rejected(StockError::Unavailable {
            product_id: command.product_id,
        });
    };
    let requested = match u32::try_from(command.amount) {
        Ok(amount) if amount <= stock.amount => amount,
        _ => {
            return Decision::rejected(StockError::Insufficient {
                product_id: command.product_id,
                requested: command.amount,
                available: stock.amount,
            });
        }
    };
    let Some(existing) = cart.find(command.product_id) else {
        return Decision::rejected(DecideError::NotInCart(command.product_id));
    };
    let line = Product {
        amount: requested,
        ..existing.clone()
    };
    Decision::accepted(cart.with_line(line), command.product_id)
}
