//! Client List State — search results, pagination, wishlist view, and theme.
//!
//! State lives in an immutable `ListState` snapshot. Every change is an
//! `Action` folded in by the pure `reduce` function; `StateStore` owns the
//! current snapshot and keeps side effects (network, persistence, subscriber
//! notification) at its boundary.
//!
//! ## Example
//!
//! ```ignore
//! use car_catalog::state::{Action, CatalogCarSource, StateStore};
//! use car_catalog::{Catalog, InMemoryKeyValueStore, SearchFilters};
//!
//! let store = StateStore::open(InMemoryKeyValueStore::new());
//! let source = CatalogCarSource::new(Catalog::builtin());
//!
//! store.search(&source, SearchFilters::new().brand("mercedes")).await;
//! let page = store.snapshot().results_page(store.config());
//! store.dispatch(Action::ToggleWishlist(page.items[0].clone()));
//! ```

mod action;
mod config;
mod list_state;
mod reducer;
mod sort;
mod source;
mod store;
mod view;

pub use action::Action;
pub use config::{ListConfig, ToggleBehavior};
pub use list_state::ListState;
pub use reducer::reduce;
pub use sort::{ParseSortKeyError, SortKey};
pub use source::{CarSource, CatalogCarSource, FetchError};
#[cfg(feature = "client")]
pub use source::HttpCarSource;
pub use store::{StateStore, SubscriberId};
pub use view::{page_count, paginate, Page};
