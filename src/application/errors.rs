use crate::core::cart::decide::{DecideError, StockError};
use crate::core::cart::product::ProductId;
use crate::core::ports::{BackendError, SnapshotError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error(transparent)]
    Stock(#[from] StockError),

    #[error("product {0} is unavailable in the catalog")]
    UnavailableProduct(ProductId),

    #[error("product {0} is not in the cart")]
    NotFound(ProductId),

    #[error("the cart total overflows with product {0}")]
    PriceOverflow(ProductId),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl From<DecideError> for CartError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::Stock(e) => CartError::Stock(e),
            DecideError::NotInCart(product_id) => CartError::NotFound(product_id),
            DecideError::PriceOverflow(product_id) => CartError::PriceOverflow(product_id),
        }
    }
}
