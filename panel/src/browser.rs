//! `web-sys` bindings for the panel state.
//!
//! SYSTEM CONTEXT
//! ==============
//! - [`BrowserStorage`] is `window.localStorage`; its `watch` is the native
//!   `storage` event, which browsers only raise in *other* tabs.
//! - [`DomChannel`] dispatches a bubbling `sidebarStateChange` `CustomEvent`
//!   on `window` with `{ isOpen }` as its detail. `dispatchEvent` runs
//!   listeners synchronously, which gives the same-tab ordering guarantee.
//! - [`listen`] wraps `addEventListener` in a [`Subscription`] that calls
//!   `removeEventListener` on drop.
//!
//! Requires a browser environment; only compiled with the `browser` feature.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{CustomEvent, CustomEventInit, Event, EventTarget, HtmlElement, KeyboardEvent, StorageEvent};

use crate::channel::{ChangeChannel, PanelChange};
use crate::consts::CHANGE_EVENT;
use crate::keys::{KeyChord, KeyOutcome};
use crate::listeners::{Mounted, Subscription};
use crate::owner::PanelOwner;
use crate::store::{StorageBackend, StorageChange, StorageError};

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Register `handler` for `event` on `target` until the subscription drops.
pub fn listen(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Subscription {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to add `{event}` listener: {}", describe(&e));
        return Subscription::detached();
    }
    let target = target.clone();
    Subscription::new(move || {
        if let Err(e) = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            log::debug!("failed to remove `{event}` listener: {}", describe(&e));
        }
        drop(closure);
    })
}

/// Current `window.innerWidth`, if a window exists.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    match web_sys::window()?.inner_width() {
        Ok(width) => width.as_f64(),
        Err(_) => None,
    }
}

fn target_is_editable(event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Some(element) = target.dyn_ref::<HtmlElement>() else {
        return false;
    };
    let tag = element.tag_name();
    tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") || element.is_content_editable()
}

/// Snapshot a DOM keydown event.
#[must_use]
pub fn key_chord(event: &KeyboardEvent) -> KeyChord {
    KeyChord {
        key: event.key(),
        ctrl: event.ctrl_key(),
        in_editable: target_is_editable(event),
    }
}

/// Wire window `resize` and document `keydown` to `owner`.
///
/// The keydown handler calls `preventDefault()` whenever the owner consumes
/// the shortcut.
pub fn attach_owner_host(owner: &PanelOwner) -> Mounted {
    let mut mounted = Mounted::new();
    let Some(window) = web_sys::window() else {
        return mounted;
    };

    let resize_owner = owner.clone();
    mounted.push(listen(&window, "resize", move |_| {
        if let Some(width) = viewport_width() {
            resize_owner.on_resize(width);
        }
    }));

    if let Some(document) = window.document() {
        let key_owner = owner.clone();
        mounted.push(listen(&document, "keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key_owner.on_key(&key_chord(event)) == KeyOutcome::Handled {
                event.prevent_default();
            }
        }));
    }
    mounted
}

// =============================================================================
// STORAGE
// =============================================================================

/// `window.localStorage` backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn area() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_owned())),
            Err(e) => Err(StorageError::Unavailable(describe(&e))),
        }
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::area()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_owned(),
            reason: describe(&e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::area()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_owned(),
            reason: describe(&e),
        })
    }

    fn watch(&self, listener: Rc<dyn Fn(&StorageChange)>) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::detached();
        };
        listen(&window, "storage", move |event: Event| {
            let Some(event) = event.dyn_ref::<StorageEvent>() else {
                return;
            };
            listener(&StorageChange {
                key: event.key(),
                new_value: event.new_value(),
            });
        })
    }
}

// =============================================================================
// SAME-TAB CHANNEL
// =============================================================================

/// `CustomEvent` channel on `window`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomChannel;

impl ChangeChannel for DomChannel {
    fn emit(&self, change: PanelChange) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let detail = match js_sys::JSON::parse(&change.to_detail()) {
            Ok(detail) => detail,
            Err(e) => {
                log::warn!("failed to build {CHANGE_EVENT} detail: {}", describe(&e));
                return;
            }
        };
        let init = CustomEventInit::new();
        init.set_bubbles(true);
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init) {
            Ok(event) => {
                if let Err(e) = window.dispatch_event(&event) {
                    log::warn!("failed to dispatch {CHANGE_EVENT}: {}", describe(&e));
                }
            }
            Err(e) => log::warn!("failed to create {CHANGE_EVENT}: {}", describe(&e)),
        }
    }

    fn subscribe(&self, listener: Rc<dyn Fn(&PanelChange)>) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::detached();
        };
        listen(&window, CHANGE_EVENT, move |event: Event| {
            let Some(event) = event.dyn_ref::<CustomEvent>() else {
                return;
            };
            let raw = match js_sys::JSON::stringify(&event.detail()) {
                Ok(raw) => String::from(raw),
                Err(e) => {
                    log::debug!("unreadable {CHANGE_EVENT} detail: {}", describe(&e));
                    return;
                }
            };
            match PanelChange::from_detail(&raw) {
                Ok(change) => listener(&change),
                Err(e) => log::debug!("ignoring malformed {CHANGE_EVENT} detail {raw}: {e}"),
            }
        })
    }
}
