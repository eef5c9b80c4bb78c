use std::sync::{Arc, Mutex};

use car_catalog::{InMemoryKeyValueStore, StateStore, Theme};

use crate::support::car;

#[test]
fn subscribers_see_every_snapshot() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = seen.clone();
    store.subscribe(move |state| {
        sink.lock().unwrap().push((state.wishlist().len(), state.theme()));
    });

    store.toggle_wishlist(&car(1));
    store.toggle_theme();
    store.toggle_wishlist(&car(1));

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(1, Theme::Light), (1, Theme::Dark), (0, Theme::Dark)]
    );
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let calls = Arc::new(Mutex::new(0));

    let counter = calls.clone();
    let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);

    store.toggle_filters();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle_filters();

    assert_eq!(*calls.lock().unwrap(), 1);
}
