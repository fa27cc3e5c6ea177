//! The panel state owner.
//!
//! ARCHITECTURE
//! ============
//! `PanelOwner` holds the canonical open/closed value for one tab and is the
//! only component that writes it. Every write (click, shortcut, resize
//! auto-close) follows the same path:
//!
//! 1. update the in-memory phase and notify local observers;
//! 2. persist through [`PanelStore`] (failures are logged and ignored);
//! 3. emit a [`PanelChange`] on the same-tab channel.
//!
//! The steps are not atomic. A failed write still broadcasts, because the
//! in-memory value is authoritative for the current tab. Any same-tab
//! listener invoked by step 3 already observes the updated value.
//!
//! LIFECYCLE
//! =========
//! The owner starts `Uninitialized` and renders [`PanelConfig::owner_fallback`].
//! [`PanelOwner::mount`] runs from the first post-render effect (never on the
//! server): it resolves the persisted record, falling back to the viewport
//! default, and immediately broadcasts the result so independently mounted
//! followers converge without waiting for user input.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::channel::{ChangeChannel, PanelChange};
use crate::config::PanelConfig;
use crate::gate::PanelPhase;
use crate::keys::{KeyChord, KeyOutcome};
use crate::listeners::{Listeners, Mounted, Subscription};
use crate::store::PanelStore;
use crate::viewport::is_narrow;

#[cfg(test)]
#[path = "owner_test.rs"]
mod owner_test;

struct OwnerInner {
    phase: Cell<PanelPhase>,
    disabled: Cell<bool>,
    store: PanelStore,
    channel: Rc<dyn ChangeChannel>,
    config: PanelConfig,
    observers: Listeners<PanelPhase>,
}

/// Single writer of the panel state for one tab. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct PanelOwner {
    inner: Rc<OwnerInner>,
}

impl PanelOwner {
    /// Owner with the default configuration.
    pub fn new(store: PanelStore, channel: Rc<dyn ChangeChannel>) -> Self {
        Self::with_config(store, channel, PanelConfig::default())
    }

    pub fn with_config(store: PanelStore, channel: Rc<dyn ChangeChannel>, config: PanelConfig) -> Self {
        Self {
            inner: Rc::new(OwnerInner {
                phase: Cell::new(PanelPhase::Uninitialized),
                disabled: Cell::new(false),
                store,
                channel,
                config,
                observers: Listeners::new(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.inner.phase.get()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase().is_mounted()
    }

    /// Value to render: resolved state, or the owner fallback before mounting.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.config.owner_open(self.phase())
    }

    /// Disable or re-enable the keyboard shortcut.
    pub fn set_disabled(&self, disabled: bool) {
        self.inner.disabled.set(disabled);
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.inner.disabled.get()
    }

    /// Observe every phase change until the handle is dropped.
    pub fn observe(&self, on_phase: impl Fn(PanelPhase) + 'static) -> Subscription {
        self.inner
            .observers
            .add(Rc::new(move |phase: &PanelPhase| on_phase(*phase)))
    }

    /// Resolve the initial value and start following other tabs.
    ///
    /// `viewport_width` is `None` when no real viewport is available, in which
    /// case the owner fallback is used. Runs once; later calls return an
    /// empty guard. Dropping the returned guard stops the cross-tab watch.
    pub fn mount(&self, viewport_width: Option<f64>) -> Mounted {
        let mut mounted = Mounted::new();
        if self.is_mounted() {
            log::debug!("panel owner already mounted");
            return mounted;
        }

        let resolved = self.resolve(viewport_width);
        self.inner.phase.set(PanelPhase::Resolved(resolved));
        self.inner.observers.notify(&PanelPhase::Resolved(resolved));
        self.inner.channel.emit(PanelChange::new(resolved));

        let weak: Weak<OwnerInner> = Rc::downgrade(&self.inner);
        mounted.push(self.inner.store.watch_open(move |open| {
            if let Some(inner) = weak.upgrade() {
                PanelOwner { inner }.commit(open, false);
            }
        }));
        mounted
    }

    /// Set the panel state. Ignored before mount. Returns whether it changed.
    pub fn set_open(&self, open: bool) -> bool {
        if !self.is_mounted() {
            log::debug!("ignoring panel write before mount");
            return false;
        }
        self.commit(open, true)
    }

    pub fn open(&self) -> bool {
        self.set_open(true)
    }

    pub fn close(&self) -> bool {
        self.set_open(false)
    }

    /// Flip the panel state and return the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.is_open();
        self.set_open(next);
        self.is_open()
    }

    /// Close the panel when the viewport shrinks below the breakpoint.
    ///
    /// Never opens it on growth. Returns whether the panel was closed.
    pub fn on_resize(&self, width_px: f64) -> bool {
        let narrow = is_narrow(width_px, self.inner.config.breakpoint_px);
        if narrow && self.phase() == PanelPhase::Resolved(true) {
            return self.commit(false, true);
        }
        false
    }

    /// Toggle on the configured shortcut.
    pub fn on_key(&self, chord: &KeyChord) -> KeyOutcome {
        if self.is_disabled() || !self.is_mounted() || !chord.is_toggle(self.inner.config.shortcut_key) {
            return KeyOutcome::Ignored;
        }
        self.toggle();
        KeyOutcome::Handled
    }

    fn resolve(&self, viewport_width: Option<f64>) -> bool {
        self.inner
            .store
            .read_open()
            .unwrap_or_else(|| self.inner.config.resolved_default(viewport_width))
    }

    fn commit(&self, open: bool, persist: bool) -> bool {
        if !self.is_mounted() || self.phase() == PanelPhase::Resolved(open) {
            return false;
        }
        self.inner.phase.set(PanelPhase::Resolved(open));
        self.inner.observers.notify(&PanelPhase::Resolved(open));
        if persist {
            self.inner.store.write_open(open);
        }
        self.inner.channel.emit(PanelChange::new(open));
        true
    }
}
