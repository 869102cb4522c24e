use crate::domain::notification::{Notification, NotificationBoard, NotificationLevel};
use crate::domain::ports::{Navigator, Notifier};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Notifier for headless runs: every notification becomes a log line.
///
/// Each post is logged, including repeats of the notification already shown
/// under the same key.
#[derive(Debug, Default)]
pub struct TracingNotifier {
    board: Mutex<NotificationBoard>,
}

impl TracingNotifier {
    /// Creates a new notifier with nothing on screen.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, key: &str, notification: Notification) {
        let mut board = self.board.lock().await;
        let replaced = board.get(key).is_some();
        match notification.level {
            NotificationLevel::Loading | NotificationLevel::Success => {
                info!(key, replaced, message = %notification.message, "notification")
            }
            NotificationLevel::Error => {
                error!(key, replaced, message = %notification.message, "notification")
            }
        }
        board.post(key, notification);
    }
}

/// Navigator for headless runs: logs where the user would be sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

#[async_trait]
impl Navigator for TracingNavigator {
    async fn push(&self, route: &str) {
        info!(route, "navigate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct CountingLayer(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for CountingLayer {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_tracing_notifier_logs_repeated_notifications() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountingLayer(count.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let notifier = TracingNotifier::new();
        for _ in 0..2 {
            notifier
                .notify("register", Notification::error("Please enter your name"))
                .await;
        }

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_tracing_notifier_tracks_current_notification() {
        let notifier = TracingNotifier::new();
        notifier
            .notify("register", Notification::loading("Processing..."))
            .await;
        notifier
            .notify("register", Notification::success("Registration successful"))
            .await;

        let board = notifier.board.lock().await;
        assert_eq!(board.len(), 1);
        assert_eq!(
            board.get("register"),
            Some(&Notification::success("Registration successful"))
        );
    }
}
