//! Notifier port.
//!
//! Notifications are strictly best-effort: they never block or fail the
//! primary text mutation, and a delivery error is ignored by design.

use textsavvy_types::notify::Notification;

/// Trait for host notification surfaces.
///
/// Uses RPITIT. Implementations must not panic; returning is the only
/// contract.
pub trait Notifier: Send + Sync {
    /// Deliver a notification, best-effort.
    fn notify(&self, notification: &Notification) -> impl std::future::Future<Output = ()> + Send;
}

/// Notifier that writes to the structured log instead of a host surface.
#[derive(Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn notify(&self, notification: &Notification) {
        tracing::info!(
            kind = ?notification.kind,
            message = %notification.message,
            "Notification"
        );
    }
}
