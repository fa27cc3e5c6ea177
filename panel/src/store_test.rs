use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::memory::MemoryOrigin;

fn store_on(origin: &MemoryOrigin) -> PanelStore {
    PanelStore::new(Rc::new(origin.tab()))
}

// =============================================================
// Flag codec
// =============================================================

#[test]
fn parse_flag_accepts_only_true_and_false() {
    assert_eq!(parse_flag("true"), Some(true));
    assert_eq!(parse_flag("false"), Some(false));
    assert_eq!(parse_flag("TRUE"), None);
    assert_eq!(parse_flag("1"), None);
    assert_eq!(parse_flag(""), None);
}

#[test]
fn encode_flag_matches_persisted_layout() {
    assert_eq!(encode_flag(true), "true");
    assert_eq!(encode_flag(false), "false");
}

// =============================================================
// Read / write
// =============================================================

#[test]
fn read_open_is_none_without_record() {
    let origin = MemoryOrigin::new();
    assert_eq!(store_on(&origin).read_open(), None);
}

#[test]
fn write_open_persists_string_record() {
    let origin = MemoryOrigin::new();
    let store = store_on(&origin);

    assert!(store.write_open(false));
    assert_eq!(origin.value("sidebarOpen").as_deref(), Some("false"));
    assert_eq!(store.read_open(), Some(false));

    assert!(store.write_open(true));
    assert_eq!(store.read_open(), Some(true));
}

#[test]
fn unrecognized_record_reads_as_absent() {
    let origin = MemoryOrigin::new();
    let store = store_on(&origin);
    assert!(store.set("sidebarOpen", "yes"));
    assert_eq!(store.get("sidebarOpen").as_deref(), Some("yes"));
    assert_eq!(store.read_open(), None);
}

#[test]
fn custom_key_is_isolated() {
    let origin = MemoryOrigin::new();
    let store = PanelStore::with_key(Rc::new(origin.tab()), "navOpen");
    assert_eq!(store.key(), "navOpen");
    store.write_open(true);
    assert_eq!(origin.value("navOpen").as_deref(), Some("true"));
    assert_eq!(origin.value("sidebarOpen"), None);
}

#[test]
fn outage_is_swallowed_on_read_and_write() {
    let origin = MemoryOrigin::new();
    let store = store_on(&origin);
    store.write_open(true);
    origin.set_available(false);

    assert_eq!(store.read_open(), None);
    assert_eq!(store.get("sidebarOpen"), None);
    assert!(!store.write_open(false));
    assert_eq!(origin.value("sidebarOpen").as_deref(), Some("true"));

    origin.set_available(true);
    assert_eq!(store.read_open(), Some(true));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write {
        key: "sidebarOpen".to_owned(),
        reason: "quota exceeded".to_owned(),
    };
    assert_eq!(err.to_string(), "failed to write `sidebarOpen`: quota exceeded");
}

// =============================================================
// Cross-tab watch
// =============================================================

#[test]
fn watch_open_sees_other_tab_writes_only() {
    let origin = MemoryOrigin::new();
    let writer = store_on(&origin);
    let reader = store_on(&origin);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let _own = writer.watch_open({
        let sink = Rc::clone(&seen);
        move |open| sink.borrow_mut().push(("writer", open))
    });
    let _other = reader.watch_open(move |open| sink.borrow_mut().push(("reader", open)));

    writer.write_open(false);
    assert!(seen.borrow().is_empty());

    origin.deliver_pending();
    assert_eq!(*seen.borrow(), vec![("reader", false)]);
}

#[test]
fn watch_open_ignores_other_keys() {
    let origin = MemoryOrigin::new();
    let writer = store_on(&origin);
    let reader = store_on(&origin);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = reader.watch_open(move |open| sink.borrow_mut().push(open));

    writer.set("theme", "dark");
    origin.deliver_pending();

    assert!(seen.borrow().is_empty());
}

#[test]
fn watch_open_reads_unrecognized_values_as_closed() {
    let origin = MemoryOrigin::new();
    let writer = store_on(&origin);
    let reader = store_on(&origin);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = reader.watch_open(move |open| sink.borrow_mut().push(open));

    writer.set("sidebarOpen", "maybe");
    writer.set("sidebarOpen", "true");
    writer.set("sidebarOpen", "TRUE");
    writer.set("sidebarOpen", "");
    origin.deliver_pending();

    assert_eq!(*seen.borrow(), vec![false, true, false, false]);
}
