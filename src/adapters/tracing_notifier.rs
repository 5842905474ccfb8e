use crate::application::notifications::{Notification, Notifier};

/// Emits each notification as a structured warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait::async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        tracing::warn!(
            kind = notification.kind(),
            message = notification.message(),
            "cart notification"
        );
    }
}
