// User-facing notifications raised when a cart operation fails.
//
// Each failing operation maps its typed error onto exactly one transient message.
// Notifiers receive them; the HTTP inbound adapter also returns them to the caller.

use crate::application::errors::CartError;
use crate::core::cart::decide::StockError;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    OutOfStock,
    AddFailure,
    RemoveFailure,
    UpdateFailure,
}

impl Notification {
    pub fn for_failure(operation: CartOperation, error: &CartError) -> Self {
        if let CartError::Stock(StockError::Insufficient { .. }) = error {
            return Notification::OutOfStock;
        }
        match operation {
            CartOperation::Add => Notification::AddFailure,
            CartOperation::Remove => Notification::RemoveFailure,
            CartOperation::Update => Notification::UpdateFailure,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Notification::OutOfStock => "out_of_stock",
            Notification::AddFailure => "add_failure",
            Notification::RemoveFailure => "remove_failure",
            Notification::UpdateFailure => "update_failure",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notification::OutOfStock => "Requested quantity is out of stock",
            Notification::AddFailure => "Could not add the product",
            Notification::RemoveFailure => "Could not remove the product",
            Notification::UpdateFailure => "Could not change the product quantity",
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification);
}
