//! Listener tables with RAII removal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every listener registered by this crate (same-tab channel, cross-tab
//! storage watch, window resize, document keydown) is represented by a
//! [`Subscription`]. Dropping it removes the listener. A component keeps its
//! subscriptions in a [`Mounted`] guard and drops that guard on unmount, so no
//! handler can outlive the component that installed it.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

/// Shared callback invoked with a borrowed event value.
pub type Listener<T> = Rc<dyn Fn(&T)>;

/// Handle to a registered listener. Removes the listener when dropped.
#[must_use = "dropping a Subscription removes its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Subscription that runs `cancel` exactly once when dropped.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Subscription with nothing to remove.
    pub fn detached() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Subscriptions owned by one mounted component.
#[derive(Debug, Default)]
#[must_use = "dropping the guard unmounts every listener it holds"]
pub struct Mounted {
    subscriptions: Vec<Subscription>,
}

impl Mounted {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of another listener.
    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Remove every listener held by this guard.
    pub fn unmount(self) {
        drop(self);
    }
}

struct Table<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Ordered set of listeners for events of type `T`.
///
/// Dispatch is synchronous and iterates over a snapshot, so listeners may
/// subscribe or unsubscribe while being notified.
pub struct Listeners<T> {
    table: Rc<RefCell<Table<T>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            table: Rc::clone(&self.table),
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            table: Rc::new(RefCell::new(Table {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<T: 'static> Listeners<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays registered until the returned handle drops.
    pub fn add(&self, listener: Listener<T>) -> Subscription {
        let id = {
            let mut table = self.table.borrow_mut();
            let id = table.next_id;
            table.next_id += 1;
            table.entries.push((id, listener));
            id
        };
        let weak: Weak<RefCell<Table<T>>> = Rc::downgrade(&self.table);
        Subscription::new(move || {
            if let Some(table) = weak.upgrade() {
                table.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Invoke every registered listener with `value`, in registration order.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .table
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
