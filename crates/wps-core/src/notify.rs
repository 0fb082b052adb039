//! User-visible toast notifications.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    fn new(title: &str, description: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant,
            created_at: Utc::now(),
        }
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::new("Success", description, ToastVariant::Default)
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self::new("Error", description, ToastVariant::Destructive)
    }

    pub fn validation(description: impl Into<String>) -> Self {
        Self::new("Validation Error", description, ToastVariant::Destructive)
    }
}

/// Sink for toasts raised by services and the wizard.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Bounded queue of pending toasts. The oldest toast is dropped once
/// `capacity` is reached.
pub struct ToastCenter {
    queue: Mutex<VecDeque<Toast>>,
    capacity: usize,
}

impl ToastCenter {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    /// Removes and returns every pending toast, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        self.queue.lock().drain(..).collect()
    }

    pub fn pending(&self) -> Vec<Toast> {
        self.queue.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(wps_shared::constants::DEFAULT_NOTIFICATION_CAPACITY)
    }
}

impl Notifier for ToastCenter {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Default => info!(title = %toast.title, "{}", toast.description),
            ToastVariant::Destructive => warn!(title = %toast.title, "{}", toast.description),
        }

        let mut queue = self.queue.lock();
        while queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_oldest_when_full() {
        let center = ToastCenter::new(2);
        center.notify(Toast::success("one"));
        center.notify(Toast::success("two"));
        center.notify(Toast::error("three"));

        let toasts = center.drain();
        let descriptions: Vec<_> = toasts.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["two", "three"]);
        assert_eq!(toasts[1].title, "Error");
        assert!(center.is_empty());
    }
}
