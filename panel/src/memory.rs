//! In-memory storage shared by simulated tabs.
//!
//! DESIGN
//! ======
//! A [`MemoryOrigin`] plays the role of one browser profile's per-origin
//! storage area. Each [`MemoryStorage`] is one tab's view of it. Writes apply
//! immediately, but the resulting cross-tab notifications are queued and only
//! reach the *other* tabs when [`MemoryOrigin::deliver_pending`] runs, which
//! models the asynchronous, unordered delivery of the browser `storage` event.
//! The writer's own tab is never notified.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::listeners::{Listeners, Subscription};
use crate::store::{StorageBackend, StorageChange, StorageError};

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

struct OriginState {
    values: RefCell<HashMap<String, String>>,
    available: Cell<bool>,
    next_tab: Cell<u64>,
    tabs: RefCell<Vec<(u64, Listeners<StorageChange>)>>,
    pending: RefCell<VecDeque<(u64, StorageChange)>>,
}

/// Storage area shared by every tab of one origin.
#[derive(Clone)]
pub struct MemoryOrigin {
    state: Rc<OriginState>,
}

impl Default for MemoryOrigin {
    fn default() -> Self {
        Self {
            state: Rc::new(OriginState {
                values: RefCell::new(HashMap::new()),
                available: Cell::new(true),
                next_tab: Cell::new(0),
                tabs: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
            }),
        }
    }
}

impl MemoryOrigin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new tab onto this origin.
    #[must_use]
    pub fn tab(&self) -> MemoryStorage {
        let id = self.state.next_tab.get();
        self.state.next_tab.set(id + 1);
        let listeners = Listeners::new();
        self.state.tabs.borrow_mut().push((id, listeners.clone()));
        MemoryStorage {
            origin: self.clone(),
            tab: id,
            listeners,
        }
    }

    /// Simulate storage being disabled (`false`) or restored (`true`).
    pub fn set_available(&self, available: bool) {
        self.state.available.set(available);
    }

    /// Current stored value for `key`, bypassing availability.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.state.values.borrow().get(key).cloned()
    }

    /// Number of cross-tab notifications not yet delivered.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.pending.borrow().len()
    }

    /// Deliver every queued cross-tab notification. Returns how many were sent.
    pub fn deliver_pending(&self) -> usize {
        let mut delivered = 0;
        loop {
            let next = self.state.pending.borrow_mut().pop_front();
            let Some((target, change)) = next else {
                break;
            };
            let listeners = self
                .state
                .tabs
                .borrow()
                .iter()
                .find(|(id, _)| *id == target)
                .map(|(_, listeners)| listeners.clone());
            if let Some(listeners) = listeners {
                listeners.notify(&change);
                delivered += 1;
            }
        }
        delivered
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.state.available.get() {
            Ok(())
        } else {
            Err(StorageError::Unavailable("storage disabled".to_owned()))
        }
    }

    fn write_from(&self, writer: u64, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        let previous = self
            .state
            .values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        if previous.as_deref() == Some(value) {
            return Ok(());
        }
        let change = StorageChange {
            key: Some(key.to_owned()),
            new_value: Some(value.to_owned()),
        };
        let mut pending = self.state.pending.borrow_mut();
        for (id, _) in self.state.tabs.borrow().iter() {
            if *id != writer {
                pending.push_back((*id, change.clone()));
            }
        }
        Ok(())
    }

    fn close_tab(&self, tab: u64) {
        self.state.tabs.borrow_mut().retain(|(id, _)| *id != tab);
        self.state.pending.borrow_mut().retain(|(id, _)| *id != tab);
    }
}

/// One tab's handle onto a [`MemoryOrigin`]. Closing (dropping) the handle
/// discards its undelivered notifications.
pub struct MemoryStorage {
    origin: MemoryOrigin,
    tab: u64,
    listeners: Listeners<StorageChange>,
}

impl MemoryStorage {
    /// Origin this tab belongs to.
    #[must_use]
    pub fn origin(&self) -> &MemoryOrigin {
        &self.origin
    }

    /// Number of live storage watchers in this tab.
    #[must_use]
    pub fn watchers(&self) -> usize {
        self.listeners.len()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.origin.check_available()?;
        Ok(self.origin.value(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.origin.write_from(self.tab, key, value)
    }

    fn watch(&self, listener: Rc<dyn Fn(&StorageChange)>) -> Subscription {
        self.listeners.add(listener)
    }
}

impl Drop for MemoryStorage {
    fn drop(&mut self) {
        self.origin.close_tab(self.tab);
    }
}
