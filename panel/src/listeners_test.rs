use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<u32>>>, Listener<u32>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let listener: Listener<u32> = Rc::new(move |v: &u32| sink.borrow_mut().push(*v));
    (seen, listener)
}

#[test]
fn notify_reaches_every_listener_in_order() {
    let listeners = Listeners::<u32>::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    let second = Rc::clone(&order);
    let _a = listeners.add(Rc::new(move |v: &u32| first.borrow_mut().push(("a", *v))));
    let _b = listeners.add(Rc::new(move |v: &u32| second.borrow_mut().push(("b", *v))));

    listeners.notify(&7);

    assert_eq!(*order.borrow(), vec![("a", 7), ("b", 7)]);
}

#[test]
fn dropping_subscription_removes_listener() {
    let listeners = Listeners::<u32>::new();
    let (seen, listener) = recorder();
    let sub = listeners.add(listener);
    assert_eq!(listeners.len(), 1);

    drop(sub);
    listeners.notify(&1);

    assert!(listeners.is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn subscription_outliving_table_is_harmless() {
    let listeners = Listeners::<u32>::new();
    let (_seen, listener) = recorder();
    let sub = listeners.add(listener);
    drop(listeners);
    drop(sub);
}

#[test]
fn listener_may_unsubscribe_itself_during_dispatch() {
    let listeners = Listeners::<u32>::new();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));

    let slot_in = Rc::clone(&slot);
    let calls_in = Rc::clone(&calls);
    let sub = listeners.add(Rc::new(move |_: &u32| {
        calls_in.set(calls_in.get() + 1);
        slot_in.borrow_mut().take();
    }));
    *slot.borrow_mut() = Some(sub);

    listeners.notify(&1);
    listeners.notify(&2);

    assert_eq!(calls.get(), 1);
    assert!(listeners.is_empty());
}

#[test]
fn mounted_guard_drops_all_subscriptions() {
    let listeners = Listeners::<u32>::new();
    let (seen, listener) = recorder();
    let mut mounted = Mounted::new();
    mounted.push(listeners.add(Rc::clone(&listener)));
    mounted.push(listeners.add(listener));
    mounted.push(Subscription::detached());
    assert_eq!(mounted.len(), 3);

    mounted.unmount();
    listeners.notify(&3);

    assert!(listeners.is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn subscription_cancel_runs_once() {
    let runs = Rc::new(Cell::new(0));
    let runs_in = Rc::clone(&runs);
    let sub = Subscription::new(move || runs_in.set(runs_in.get() + 1));
    drop(sub);
    assert_eq!(runs.get(), 1);
}
