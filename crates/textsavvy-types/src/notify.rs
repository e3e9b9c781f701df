//! Fire-and-forget notification events.
//!
//! Delivered to a host notification surface after an enhancement; delivery
//! failure is ignored (non-critical by design).

use serde::{Deserialize, Serialize};

/// Kind of notification emitted toward the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The enhancement succeeded, but not on the preferred provider.
    FallbackUsed,
    Generic,
}

/// A notification event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn fallback_used(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::FallbackUsed,
            message: message.into(),
        }
    }

    pub fn generic(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Generic,
            message: message.into(),
        }
    }
}
