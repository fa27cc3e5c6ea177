use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recording_watch(tab: &MemoryStorage) -> (Rc<RefCell<Vec<StorageChange>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = tab.watch(Rc::new(move |change: &StorageChange| sink.borrow_mut().push(change.clone())));
    (seen, sub)
}

#[test]
fn tabs_share_values() {
    let origin = MemoryOrigin::new();
    let a = origin.tab();
    let b = origin.tab();

    a.write("sidebarOpen", "true").expect("write");

    assert_eq!(b.read("sidebarOpen").expect("read").as_deref(), Some("true"));
}

#[test]
fn notifications_are_queued_until_delivered() {
    let origin = MemoryOrigin::new();
    let a = origin.tab();
    let b = origin.tab();
    let (seen, _sub) = recording_watch(&b);

    a.write("sidebarOpen", "false").expect("write");
    assert_eq!(origin.pending(), 1);
    assert!(seen.borrow().is_empty());

    assert_eq!(origin.deliver_pending(), 1);
    assert_eq!(
        *seen.borrow(),
        vec![StorageChange {
            key: Some("sidebarOpen".to_owned()),
            new_value: Some("false".to_owned()),
        }]
    );
}

#[test]
fn writer_tab_is_never_notified() {
    let origin = MemoryOrigin::new();
    let a = origin.tab();
    let (seen, _sub) = recording_watch(&a);

    a.write("sidebarOpen", "true").expect("write");
    origin.deliver_pending();

    assert!(seen.borrow().is_empty());
}

#[test]
fn unchanged_value_raises_no_notification() {
    let origin = MemoryOrigin::new();
    let a = origin.tab();
    let _b = origin.tab();

    a.write("sidebarOpen", "true").expect("write");
    origin.deliver_pending();
    a.write("sidebarOpen", "true").expect("write");

    assert_eq!(origin.pending(), 0);
}

#[test]
fn unavailable_origin_rejects_reads_and_writes() {
    let origin = MemoryOrigin::new();
    let a = origin.tab();
    origin.set_available(false);

    assert!(matches!(a.read("sidebarOpen"), Err(StorageError::Unavailable(_))));
    assert!(matches!(a.write("sidebarOpen", "true"), Err(StorageError::Unavailable(_))));
    assert_eq!(origin.value("sidebarOpen"), None);
}

#[test]
fn closed_tab_drops_its_pending_notifications() {
    let origin = MemoryOrigin::new();
    let a = origin.tab();
    let b = origin.tab();

    a.write("sidebarOpen", "false").expect("write");
    assert_eq!(origin.pending(), 1);
    drop(b);

    assert_eq!(origin.pending(), 0);
    assert_eq!(origin.deliver_pending(), 0);
}

#[test]
fn watchers_count_tracks_subscriptions() {
    let origin = MemoryOrigin::new();
    let a = origin.tab();
    let (_seen, sub) = recording_watch(&a);
    assert_eq!(a.watchers(), 1);
    drop(sub);
    assert_eq!(a.watchers(), 0);
}
