//! Wishlist and theme preference, plus their persistence.
//!
//! Both values are mirrored to a `KeyValueStore` under fixed keys:
//!
//! - `"wishlist"` — JSON array of cars
//! - `"theme"` — `light` or `dark`
//!
//! Reads never fail: a missing or unreadable value falls back to the default
//! (empty wishlist, light theme).

mod persistence;
mod theme;
mod wishlist;

pub use persistence::{PersistenceError, WishlistPersistence, THEME_KEY, WISHLIST_KEY};
pub use theme::{ParseThemeError, Theme};
pub use wishlist::{Toggled, Wishlist};
