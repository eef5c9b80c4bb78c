use thiserror::Error;
use tracing::warn;

use super::{Theme, Wishlist};
use crate::kv::{KeyValueStore, KvError};

pub const WISHLIST_KEY: &str = "wishlist";
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Store(#[from] KvError),
    #[error("wishlist encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Loads and saves the wishlist and theme through an injected store.
#[derive(Debug, Clone, Default)]
pub struct WishlistPersistence<K> {
    store: K,
}

impl<K: KeyValueStore> WishlistPersistence<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    /// The saved wishlist, or an empty one when nothing usable is stored.
    pub fn load(&self) -> Wishlist {
        let raw = match self.store.get(WISHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Wishlist::new(),
            Err(e) => {
                warn!(error = %e, "wishlist read failed, starting empty");
                return Wishlist::new();
            }
        };
        match serde_json::from_str::<Wishlist>(&raw) {
            Ok(wishlist) => Wishlist::from_cars(wishlist.cars().iter().cloned()),
            Err(e) => {
                warn!(error = %e, "stored wishlist is not decodable, starting empty");
                Wishlist::new()
            }
        }
    }

    pub fn save(&self, wishlist: &Wishlist) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(wishlist)?;
        self.store.set(WISHLIST_KEY, &json)?;
        Ok(())
    }

    /// The saved theme, or `Theme::Light` when missing or unrecognised.
    pub fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "stored theme ignored");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "theme read failed, using default");
                Theme::default()
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PersistenceError> {
        self.store.set(THEME_KEY, theme.as_str())?;
        Ok(())
    }
}
