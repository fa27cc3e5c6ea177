//! Same-tab change notification channel.
//!
//! The owner emits a [`PanelChange`] each time its value changes; every
//! listener mounted in the same document receives it synchronously, before
//! `emit` returns. Nothing crosses tab boundaries here; that is the storage
//! layer's job (see [`crate::store::StorageBackend::watch`]).

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::listeners::{Listeners, Subscription};

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

/// Payload of the `sidebarStateChange` notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelChange {
    #[serde(rename = "isOpen")]
    pub is_open: bool,
}

impl PanelChange {
    #[must_use]
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }

    /// JSON detail payload, `{"isOpen":bool}`.
    #[must_use]
    pub fn to_detail(self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| format!("{{\"isOpen\":{}}}", self.is_open))
    }

    /// Parse a JSON detail payload.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed payloads.
    pub fn from_detail(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Synchronous, page-scoped notification bus.
pub trait ChangeChannel {
    /// Deliver `change` to every current subscriber before returning.
    fn emit(&self, change: PanelChange);

    /// Receive every future change until the handle is dropped.
    fn subscribe(&self, listener: Rc<dyn Fn(&PanelChange)>) -> Subscription;
}

/// In-process [`ChangeChannel`] for non-browser targets and tests.
#[derive(Clone, Default)]
pub struct LocalChannel {
    listeners: Listeners<PanelChange>,
}

impl LocalChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mounted subscribers.
    #[must_use]
    pub fn subscribers(&self) -> usize {
        self.listeners.len()
    }
}

impl ChangeChannel for LocalChannel {
    fn emit(&self, change: PanelChange) {
        self.listeners.notify(&change);
    }

    fn subscribe(&self, listener: Rc<dyn Fn(&PanelChange)>) -> Subscription {
        self.listeners.add(listener)
    }
}
