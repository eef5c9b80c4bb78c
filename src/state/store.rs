//! StateStore - owns the current `ListState` and runs side effects.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use tracing::{debug, error, info, warn};

use super::{reduce, Action, CarSource, ListConfig, ListState, SortKey};
use crate::catalog::Car;
use crate::filter::SearchFilters;
use crate::kv::KeyValueStore;
use crate::wishlist::WishlistPersistence;

pub type SubscriberId = u64;

type Subscriber = Box<dyn Fn(&ListState) + Send + Sync>;

/// State container for the client list state.
///
/// Transitions go through [`StateStore::dispatch`]. Dispatches are serialized
/// by a transition lock held across the reduction and the persistence write,
/// so the stored wishlist and theme always follow reduction order. The state
/// lock itself is only held while the snapshot is swapped, so readers are
/// never blocked by a slow store. Subscribers run after the transition lock is
/// released and must not subscribe or unsubscribe from inside their callback.
pub struct StateStore<K> {
    state: RwLock<ListState>,
    config: ListConfig,
    persistence: WishlistPersistence<K>,
    transition: Mutex<()>,
    subscribers: RwLock<Vec<(SubscriberId, Subscriber)>>,
    next_subscriber: AtomicU64,
}

impl<K: KeyValueStore> StateStore<K> {
    /// Open a store with the default page sizes, restoring the persisted
    /// wishlist and theme.
    pub fn open(store: K) -> Self {
        Self::with_config(store, ListConfig::default())
    }

    pub fn with_config(store: K, config: ListConfig) -> Self {
        let persistence = WishlistPersistence::new(store);
        let restore = Action::Restore {
            wishlist: persistence.load(),
            theme: persistence.load_theme(),
        };
        let state = reduce(&ListState::default(), &restore, &config);
        info!(
            wishlist = state.wishlist().len(),
            theme = %state.theme(),
            "list state restored"
        );

        Self {
            state: RwLock::new(state),
            config,
            persistence,
            transition: Mutex::new(()),
            subscribers: RwLock::new(Vec::new()),
            next_subscriber: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn persistence(&self) -> &WishlistPersistence<K> {
        &self.persistence
    }

    /// A copy of the current snapshot.
    pub fn snapshot(&self) -> ListState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a callback invoked with every new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> SubscriberId
    where
        F: Fn(&ListState) + Send + Sync + 'static,
    {
        let id = self.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a subscriber. Returns true if it was registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    /// Apply an action and return the resulting snapshot.
    pub fn dispatch(&self, action: Action) -> ListState {
        let next = {
            let _transition = self
                .transition
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let (previous, next) = {
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                let next = reduce(&state, &action, &self.config);
                let previous = std::mem::replace(&mut *state, next.clone());
                (previous, next)
            };
            debug!(action = action.name(), "action dispatched");
            self.persist(&previous, &next);
            next
        };

        self.notify(&next);
        next
    }

    /// Run one search against `source`.
    ///
    /// The store is not locked while the request is in flight, so other
    /// actions keep working. Concurrent searches are not sequenced: whichever
    /// response resolves last replaces the results. On failure the error is
    /// logged and the previous results stay.
    pub async fn search<S>(&self, source: &S, filters: SearchFilters) -> ListState
    where
        S: CarSource + ?Sized,
    {
        self.dispatch(Action::SearchStarted);
        match source.fetch(&filters).await {
            Ok(cars) => {
                debug!(?filters, found = cars.len(), "search completed");
                self.dispatch(Action::SearchSucceeded(cars))
            }
            Err(e) => {
                error!(?filters, error = %e, "failed to fetch cars");
                self.dispatch(Action::SearchFailed)
            }
        }
    }

    pub fn toggle_wishlist(&self, car: &Car) -> ListState {
        self.dispatch(Action::ToggleWishlist(car.clone()))
    }

    pub fn set_results_page(&self, page: usize) -> ListState {
        self.dispatch(Action::SetResultsPage(page))
    }

    pub fn set_wishlist_page(&self, page: usize) -> ListState {
        self.dispatch(Action::SetWishlistPage(page))
    }

    pub fn set_wishlist_search(&self, text: impl Into<String>) -> ListState {
        self.dispatch(Action::SetWishlistSearch(text.into()))
    }

    pub fn set_sort(&self, key: SortKey) -> ListState {
        self.dispatch(Action::SetSort(key))
    }

    pub fn toggle_theme(&self) -> ListState {
        self.dispatch(Action::ToggleTheme)
    }

    pub fn toggle_filters(&self) -> ListState {
        self.dispatch(Action::ToggleFilters)
    }

    fn persist(&self, previous: &ListState, next: &ListState) {
        if previous.wishlist() != next.wishlist() {
            if let Err(e) = self.persistence.save(next.wishlist()) {
                warn!(error = %e, "wishlist save failed");
            }
        }
        if previous.theme() != next.theme() {
            if let Err(e) = self.persistence.save_theme(next.theme()) {
                warn!(error = %e, "theme save failed");
            }
        }
    }

    fn notify(&self, snapshot: &ListState) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in subscribers.iter() {
            listener(snapshot);
        }
    }
}
