//! Durable, tab-shared persistence for the panel preference.
//!
//! ERROR HANDLING
//! ==============
//! Backends report faults (storage disabled, quota exceeded, sandboxed
//! context) as [`StorageError`]. [`PanelStore`] is the only caller of a
//! backend and never lets those errors escape: reads degrade to "no persisted
//! value", writes are dropped, and both log a warning. The preference is a
//! convenience, so an outage must never break the page.

use std::rc::Rc;

use crate::consts::{STORAGE_KEY, VALUE_CLOSED, VALUE_OPEN};
use crate::listeners::Subscription;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Fault raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The storage area cannot be reached at all.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Reading `key` failed.
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    /// Writing `key` failed (quota, privacy mode, ...).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// Cross-context notification raised when another context writes the store.
///
/// `key` is `None` when the whole storage area was cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
    pub new_value: Option<String>,
}

/// A string key/value area shared by every tab of one origin.
///
/// `watch` listeners fire only for writes made by *other* contexts, never for
/// the caller's own writes.
pub trait StorageBackend {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the storage area cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write is rejected.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Observe writes made by other contexts.
    fn watch(&self, listener: Rc<dyn Fn(&StorageChange)>) -> Subscription;
}

/// Parse a persisted flag. Anything but `"true"`/`"false"` is unrecognized.
#[must_use]
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        VALUE_OPEN => Some(true),
        VALUE_CLOSED => Some(false),
        _ => None,
    }
}

/// Persisted form of `open`.
#[must_use]
pub fn encode_flag(open: bool) -> &'static str {
    if open { VALUE_OPEN } else { VALUE_CLOSED }
}

/// Infallible facade over a [`StorageBackend`], bound to one record key.
#[derive(Clone)]
pub struct PanelStore {
    backend: Rc<dyn StorageBackend>,
    key: String,
}

impl PanelStore {
    /// Store using the standard `sidebarOpen` key.
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Store using a custom record key.
    pub fn with_key(backend: Rc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Record key this store reads and writes.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read `key`, treating any fault as absence.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("panel preference read failed, using viewport default: {e}");
                None
            }
        }
    }

    /// Write `value` under `key`. Returns whether the write landed.
    pub fn set(&self, key: &str, value: &str) -> bool {
        match self.backend.write(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("panel preference write failed: {e}");
                false
            }
        }
    }

    /// Persisted open state, if a recognizable record exists.
    #[must_use]
    pub fn read_open(&self) -> Option<bool> {
        let raw = self.get(&self.key)?;
        let parsed = parse_flag(&raw);
        if parsed.is_none() {
            log::debug!("ignoring unrecognized `{}` value {raw:?}", self.key);
        }
        parsed
    }

    /// Persist `open`. Returns whether the write landed.
    pub fn write_open(&self, open: bool) -> bool {
        self.set(&self.key, encode_flag(open))
    }

    /// Follow open-state writes made by other contexts.
    ///
    /// Any value other than `"true"` reads as closed. Changes to other keys,
    /// removals and clears are ignored.
    pub fn watch_open(&self, on_change: impl Fn(bool) + 'static) -> Subscription {
        let key = self.key.clone();
        self.backend.watch(Rc::new(move |change: &StorageChange| {
            if change.key.as_deref() != Some(key.as_str()) {
                return;
            }
            let Some(raw) = change.new_value.as_deref() else {
                return;
            };
            if parse_flag(raw).is_none() {
                log::debug!("treating unrecognized `{key}` value {raw:?} as closed");
            }
            on_change(raw == VALUE_OPEN);
        }))
    }
}
