use crate::application::cart_store::DynCartStore;
use crate::application::notifications::Notifier;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The lock is held for a whole cart operation, including its backend calls.
#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<Mutex<DynCartStore>>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(store: DynCartStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cart: Arc::new(Mutex::new(store)),
            notifier,
        }
    }
}
