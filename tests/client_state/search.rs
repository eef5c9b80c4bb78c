use std::sync::Arc;
use std::time::Duration;

use car_catalog::state::CatalogCarSource;
use car_catalog::{Catalog, InMemoryKeyValueStore, SearchFilters, StateStore, Theme};
use tokio::sync::Notify;

use crate::support::{ids, DelayedSource, FailingSource, GatedSource};

#[tokio::test]
async fn search_replaces_results_and_resets_page() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let source = CatalogCarSource::new(Catalog::builtin());

    store.search(&source, SearchFilters::new()).await;
    store.set_results_page(3);
    assert_eq!(store.snapshot().results_page_number(), 3);

    let state = store
        .search(&source, SearchFilters::new().brand("mercedes"))
        .await;
    assert_eq!(ids(state.results()), (5..=12).collect::<Vec<u64>>());
    assert_eq!(state.results_page_number(), 1);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn results_paginate_by_five() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let source = CatalogCarSource::new(Catalog::builtin());
    let state = store.search(&source, SearchFilters::new()).await;

    let first = state.results_page(store.config());
    assert_eq!(ids(&first.items), vec![1, 2, 3, 4, 5]);
    assert_eq!(first.total_pages, 3);

    let state = store.set_results_page(3);
    assert_eq!(ids(&state.results_page(store.config()).items), vec![11, 12]);

    let state = store.set_results_page(4);
    assert!(state.results_page(store.config()).is_empty());
}

#[tokio::test]
async fn failed_search_keeps_previous_results() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let source = CatalogCarSource::new(Catalog::builtin());
    store.search(&source, SearchFilters::new().brand("honda")).await;

    let state = store.search(&FailingSource, SearchFilters::new()).await;
    assert_eq!(ids(state.results()), vec![2]);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn last_response_to_resolve_wins() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let slow = DelayedSource {
        delay: Duration::from_millis(80),
    };
    let fast = DelayedSource {
        delay: Duration::from_millis(5),
    };

    // The BMW search is issued first but resolves last.
    tokio::join!(
        store.search(&slow, SearchFilters::new().brand("bmw")),
        store.search(&fast, SearchFilters::new().brand("ford")),
    );

    assert_eq!(ids(store.snapshot().results()), vec![4]);
}

#[tokio::test]
async fn other_actions_work_while_a_search_is_pending() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let gate = Arc::new(Notify::new());
    let source = GatedSource { gate: gate.clone() };

    let interact = async {
        tokio::task::yield_now().await;
        let state = store.snapshot();
        assert!(state.is_loading());

        let state = store.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.is_loading());
        gate.notify_one();
    };

    let (state, ()) = tokio::join!(
        store.search(&source, SearchFilters::new().brand("toyota")),
        interact,
    );

    assert_eq!(ids(state.results()), vec![1]);
    assert_eq!(state.theme(), Theme::Dark);
    assert!(!state.is_loading());
}
