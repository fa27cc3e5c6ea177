//! Navigation panel open/closed state synchronization.
//!
//! Two view components that share no in-memory owner need to agree on a
//! single boolean: whether the collapsible navigation panel is open. This
//! crate owns that agreement. The single source of truth is a persisted
//! record (`sidebarOpen`) plus two notification channels:
//!
//! - a same-tab channel, delivered synchronously to every mounted listener;
//! - a cross-tab channel, raised by the storage layer in *other* tabs only,
//!   delivered asynchronously.
//!
//! Everything here is single-threaded (`Rc`/`Cell`), matching the browser
//! event loop. Browser bindings live behind the `browser` feature so the
//! logic can be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Storage key, event name, breakpoint, panel width |
//! | [`config`] | [`config::PanelConfig`] with the pre-mount fallbacks |
//! | [`viewport`] | Width to default open/closed classification |
//! | [`gate`] | Two-phase hydration gate ([`gate::PanelPhase`]) |
//! | [`listeners`] | Listener tables and RAII [`listeners::Subscription`] |
//! | [`store`] | Persistence backend trait and the infallible [`store::PanelStore`] |
//! | [`memory`] | In-memory multi-tab storage double |
//! | [`channel`] | Same-tab change notification channel |
//! | [`keys`] | Keyboard shortcut matching |
//! | [`owner`] | [`owner::PanelOwner`], the only writer |
//! | [`mirror`] | [`mirror::PanelMirror`], a read-only follower |
//! | `browser` | `web-sys` backends and listeners (feature `browser`) |

pub mod channel;
pub mod config;
pub mod consts;
pub mod gate;
pub mod keys;
pub mod listeners;
pub mod memory;
pub mod mirror;
pub mod owner;
pub mod store;
pub mod viewport;

#[cfg(feature = "browser")]
pub mod browser;

pub use channel::{ChangeChannel, LocalChannel, PanelChange};
pub use config::PanelConfig;
pub use gate::PanelPhase;
pub use keys::{KeyChord, KeyOutcome};
pub use listeners::{Mounted, Subscription};
pub use memory::{MemoryOrigin, MemoryStorage};
pub use mirror::PanelMirror;
pub use owner::PanelOwner;
pub use store::{PanelStore, StorageBackend, StorageChange, StorageError};
