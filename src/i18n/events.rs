// SPDX-License-Identifier: MPL-2.0
//! Locale switch notifications.
//!
//! The router emits one [`LocaleSwitch`] per completed change of the rendered
//! locale. Analytics (or anything else) subscribes through [`LocaleEvents`];
//! the router itself has no knowledge of who listens.

use crate::config::DEFAULT_EVENT_CAPACITY;
use crate::domain::Locale;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

/// The rendered locale changed from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleSwitch {
    pub from: Locale,
    pub to: Locale,
    pub at: DateTime<Utc>,
}

impl LocaleSwitch {
    /// Analytics event name.
    pub const EVENT_NAME: &'static str = "language_switch";
    /// Analytics event category.
    pub const CATEGORY: &'static str = "i18n";

    #[must_use]
    pub fn new(from: Locale, to: Locale) -> Self {
        Self {
            from,
            to,
            at: Utc::now(),
        }
    }

    /// Analytics label, e.g. `fr_to_de`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}_to_{}", self.from, self.to)
    }
}

/// Broadcast handle for locale switch events.
///
/// This handle is cheap to clone. Emitting never blocks: with no subscriber
/// the event is dropped, and a slow subscriber loses the oldest events once
/// its buffer is full.
#[derive(Clone, Debug)]
pub struct LocaleEvents {
    tx: broadcast::Sender<LocaleSwitch>,
}

impl LocaleEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Returns a receiver for every event emitted after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LocaleSwitch> {
        self.tx.subscribe()
    }

    pub fn emit(&self, event: LocaleSwitch) {
        tracing::info!(
            event = LocaleSwitch::EVENT_NAME,
            from = %event.from,
            to = %event.to,
            "locale switched"
        );
        // No receivers is not an error
        let _ = self.tx.send(event);
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for LocaleEvents {
    fn default() -> Self {
        Self::new()
    }
}
