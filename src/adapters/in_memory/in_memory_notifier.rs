use crate::application::notifications::{Notification, Notifier};
use tokio::sync::Mutex;

/// Records notifications in order so tests can assert what the shopper saw.
#[derive(Default)]
pub struct InMemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, notification: Notification) {
        self.notifications.lock().await.push(notification);
    }
}
