pub mod catalog;
pub mod config;
pub mod filter;
pub mod kv;
pub mod query;
pub mod state;
pub mod wishlist;

pub use catalog::{Car, Catalog, CatalogError, FuelType};
pub use config::{ConfigError, ServerConfig};
pub use filter::{filter, FilterService, SearchFilters};
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, KvError};
pub use query::{CarQuery, CarsEndpoint, QueryResponse};
pub use state::{Action, ListConfig, ListState, SortKey, StateStore, ToggleBehavior};
pub use wishlist::{PersistenceError, Theme, Wishlist, WishlistPersistence};
