//! Read-only follower of the panel state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `PanelMirror` has no reference to [`crate::PanelOwner`]. It converges on
//! the owner's value by listening to both notification channels:
//!
//! - same-tab [`PanelChange`] broadcasts (synchronous);
//! - cross-tab storage changes for the record key (asynchronous, last
//!   received value wins).
//!
//! It reads the persisted record when it mounts but never writes it. Its only
//! consumer is layout: [`PanelMirror::reserved_width_px`] tells the content
//! area how much horizontal space to leave for the panel.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::channel::{ChangeChannel, PanelChange};
use crate::config::PanelConfig;
use crate::gate::PanelPhase;
use crate::listeners::{Listeners, Mounted, Subscription};
use crate::store::PanelStore;

#[cfg(test)]
#[path = "mirror_test.rs"]
mod mirror_test;

struct MirrorInner {
    phase: Cell<PanelPhase>,
    config: PanelConfig,
    observers: Listeners<PanelPhase>,
}

/// Mirrored panel state for layout. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct PanelMirror {
    inner: Rc<MirrorInner>,
}

impl Default for PanelMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelMirror {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PanelConfig::default())
    }

    #[must_use]
    pub fn with_config(config: PanelConfig) -> Self {
        Self {
            inner: Rc::new(MirrorInner {
                phase: Cell::new(PanelPhase::Uninitialized),
                config,
                observers: Listeners::new(),
            }),
        }
    }

    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.inner.phase.get()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase().is_mounted()
    }

    /// Value to render: mirrored state, or the mirror fallback before mounting.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.inner.config.mirror_open(self.phase())
    }

    /// Horizontal space to reserve for the panel.
    #[must_use]
    pub fn reserved_width_px(&self) -> f64 {
        self.inner.config.reserved_width_px(self.phase())
    }

    pub fn observe(&self, on_phase: impl Fn(PanelPhase) + 'static) -> Subscription {
        self.inner
            .observers
            .add(Rc::new(move |phase: &PanelPhase| on_phase(*phase)))
    }

    /// Resolve from the persisted record (or viewport default) and start
    /// listening on both channels. Runs once; later calls return an empty
    /// guard. Dropping the guard detaches every listener.
    pub fn mount(&self, store: &PanelStore, channel: &dyn ChangeChannel, viewport_width: Option<f64>) -> Mounted {
        let mut mounted = Mounted::new();
        if self.is_mounted() {
            log::debug!("panel mirror already mounted");
            return mounted;
        }

        let config = &self.inner.config;
        let resolved = store
            .read_open()
            .unwrap_or_else(|| config.resolved_default(viewport_width));
        self.apply(resolved);

        let same_tab: Weak<MirrorInner> = Rc::downgrade(&self.inner);
        mounted.push(channel.subscribe(Rc::new(move |change: &PanelChange| {
            if let Some(inner) = same_tab.upgrade() {
                PanelMirror { inner }.apply(change.is_open);
            }
        })));

        let cross_tab: Weak<MirrorInner> = Rc::downgrade(&self.inner);
        mounted.push(store.watch_open(move |open| {
            if let Some(inner) = cross_tab.upgrade() {
                PanelMirror { inner }.apply(open);
            }
        }));
        mounted
    }

    fn apply(&self, open: bool) {
        let next = PanelPhase::Resolved(open);
        if self.phase() == next {
            return;
        }
        self.inner.phase.set(next);
        self.inner.observers.notify(&next);
    }
}
