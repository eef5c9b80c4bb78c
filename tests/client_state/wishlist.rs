use car_catalog::{InMemoryKeyValueStore, ListConfig, SortKey, StateStore, ToggleBehavior};

use crate::support::{car, cars, ids};

#[test]
fn toggling_the_same_car_twice_empties_the_wishlist() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    let state = store.toggle_wishlist(&car(3));
    assert!(state.is_in_wishlist(3));

    let state = store.toggle_wishlist(&car(3));
    assert!(state.wishlist().is_empty());
}

#[test]
fn toggle_is_an_involution_on_membership() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    for id in [1, 4, 7] {
        store.toggle_wishlist(&car(id));
    }
    let before: Vec<u64> = {
        let mut v = ids(store.snapshot().wishlist().cars());
        v.sort();
        v
    };

    store.toggle_wishlist(&car(4));
    let state = store.toggle_wishlist(&car(4));

    let mut after = ids(state.wishlist().cars());
    after.sort();
    assert_eq!(after, before);
    // Re-added at the end.
    assert_eq!(ids(state.wishlist().cars()), vec![1, 7, 4]);
}

#[test]
fn twelve_entries_make_two_wishlist_pages() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    for car in cars() {
        store.toggle_wishlist(&car);
    }

    let state = store.snapshot();
    let first = state.wishlist_page(store.config());
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items.len(), 10);

    let state = store.set_wishlist_page(2);
    let second = state.wishlist_page(store.config());
    assert_eq!(ids(&second.items), vec![11, 12]);
}

#[test]
fn sort_none_keeps_insertion_order() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    for id in [9, 2, 5, 1] {
        store.toggle_wishlist(&car(id));
    }
    let state = store.set_sort(SortKey::None);
    assert_eq!(ids(&state.wishlist_view()), vec![9, 2, 5, 1]);
}

#[test]
fn sort_keys_order_the_wishlist_view() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    for id in [6, 1, 4, 2, 3] {
        store.toggle_wishlist(&car(id));
    }

    let state = store.set_sort(SortKey::Price);
    assert_eq!(ids(&state.wishlist_view()), vec![2, 1, 3, 4, 6]);

    let state = store.set_sort(SortKey::Brand);
    // BMW, Ford, Honda, Mercedes, Toyota
    assert_eq!(ids(&state.wishlist_view()), vec![4, 3, 2, 6, 1]);

    let state = store.set_sort(SortKey::SeatingCapacity);
    // seats: 3→4, 1→5, 4→5 (stable), 2→7, 6→8
    assert_eq!(ids(&state.wishlist_view()), vec![3, 1, 4, 2, 6]);

    // Sorting is a view; the stored order is untouched.
    assert_eq!(ids(state.wishlist().cars()), vec![6, 1, 4, 2, 3]);
}

#[test]
fn wishlist_search_is_a_case_insensitive_substring() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    for id in [1, 5, 6, 3] {
        store.toggle_wishlist(&car(id));
    }

    let state = store.set_wishlist_search("CED");
    assert_eq!(ids(&state.wishlist_view()), vec![5, 6]);

    let state = store.set_wishlist_search("");
    assert_eq!(state.wishlist_view().len(), 4);

    let state = store.set_wishlist_search("tesla");
    assert!(state.wishlist_page(store.config()).is_empty());
}

#[test]
fn wishlist_pages_count_the_filtered_view() {
    let store = StateStore::open(InMemoryKeyValueStore::new());
    for car in cars() {
        store.toggle_wishlist(&car);
    }
    let state = store.set_wishlist_search("mercedes");
    let page = state.wishlist_page(store.config());
    assert_eq!(page.total_items, 8);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn remove_from_results_variant_is_configurable() {
    use car_catalog::state::CatalogCarSource;
    use car_catalog::{Catalog, SearchFilters};

    let config = ListConfig::default().with_toggle_behavior(ToggleBehavior::RemoveFromResults);
    let store = StateStore::with_config(InMemoryKeyValueStore::new(), config);
    let source = CatalogCarSource::new(Catalog::builtin());

    store.search(&source, SearchFilters::new().brand("mercedes")).await;
    let state = store.toggle_wishlist(&car(6));

    assert!(state.is_in_wishlist(6));
    assert_eq!(ids(state.results()), vec![5, 7, 8, 9, 10, 11, 12]);
}
