use super::{Action, ListConfig, ListState, ToggleBehavior};
use crate::wishlist::Toggled;

/// Fold one action into a state snapshot, producing the next snapshot.
///
/// Pure: no I/O, no logging. Page cursors never drop below 1.
pub fn reduce(state: &ListState, action: &Action, config: &ListConfig) -> ListState {
    let mut next = state.clone();
    match action {
        Action::Restore { wishlist, theme } => {
            next.wishlist = wishlist.clone();
            next.theme = *theme;
        }
        Action::SearchStarted => next.loading = true,
        Action::SearchSucceeded(cars) => {
            next.results = cars.clone();
            next.results_page = 1;
            next.loading = false;
        }
        Action::SearchFailed => next.loading = false,
        Action::SetResultsPage(page) => next.results_page = (*page).max(1),
        Action::ToggleWishlist(car) => {
            let toggled = next.wishlist.toggle(car);
            if toggled == Toggled::Added
                && config.toggle_behavior == ToggleBehavior::RemoveFromResults
            {
                next.results.retain(|c| c.id != car.id);
            }
        }
        Action::SetWishlistPage(page) => next.wishlist_page = (*page).max(1),
        Action::SetWishlistSearch(text) => next.wishlist_search = text.clone(),
        Action::SetSort(key) => next.sort = *key,
        Action::ToggleTheme => next.theme = next.theme.toggled(),
        Action::SetTheme(theme) => next.theme = *theme,
        Action::ToggleFilters => next.filters_visible = !next.filters_visible,
    }
    next
}
