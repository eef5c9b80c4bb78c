use crate::catalog::Car;
use crate::wishlist::{Theme, Wishlist};

use super::SortKey;

/// Every state transition of the client list state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Initialise from persisted values.
    Restore { wishlist: Wishlist, theme: Theme },
    SearchStarted,
    /// Replace the results and go back to page 1.
    SearchSucceeded(Vec<Car>),
    /// Leave the results as they were.
    SearchFailed,
    SetResultsPage(usize),
    ToggleWishlist(Car),
    SetWishlistPage(usize),
    SetWishlistSearch(String),
    SetSort(SortKey),
    ToggleTheme,
    SetTheme(Theme),
    ToggleFilters,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Restore { .. } => "restore",
            Action::SearchStarted => "search.started",
            Action::SearchSucceeded(_) => "search.succeeded",
            Action::SearchFailed => "search.failed",
            Action::SetResultsPage(_) => "results.page",
            Action::ToggleWishlist(_) => "wishlist.toggle",
            Action::SetWishlistPage(_) => "wishlist.page",
            Action::SetWishlistSearch(_) => "wishlist.search",
            Action::SetSort(_) => "wishlist.sort",
            Action::ToggleTheme => "theme.toggle",
            Action::SetTheme(_) => "theme.set",
            Action::ToggleFilters => "filters.toggle",
        }
    }
}
