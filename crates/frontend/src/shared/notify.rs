//! Toast notifications, shown through the thaw toaster.

use std::time::Duration;

use leptos::prelude::*;
use thaw::{Toast, ToastIntent, ToastOptions, ToastTitle, ToasterInjection};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }
}

/// Sink for user-visible feedback
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// [`Notifier`] backed by the thaw toaster. Each toast closes itself after
/// `timeout_ms`.
#[derive(Clone, Copy)]
pub struct Toaster {
    injection: ToasterInjection,
    timeout_ms: u32,
}

impl Toaster {
    /// Must be created below a thaw `ToasterProvider`
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            injection: ToasterInjection::expect_context(),
            timeout_ms,
        }
    }
}

pub fn toast_intent(level: NotificationLevel) -> ToastIntent {
    match level {
        NotificationLevel::Success => ToastIntent::Success,
        NotificationLevel::Error => ToastIntent::Error,
        NotificationLevel::Info => ToastIntent::Info,
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        let Notification { id, level, message } = notification;
        let options = ToastOptions::default()
            .with_id(id)
            .with_intent(toast_intent(level))
            .with_timeout(Duration::from_millis(self.timeout_ms.into()));
        self.injection.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{message}</ToastTitle>
                    </Toast>
                }
            },
            options,
        );
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster not found in component tree")
}
