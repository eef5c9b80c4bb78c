use crate::catalog::Car;
use crate::wishlist::{Theme, Wishlist};

use super::view::Page;
use super::{ListConfig, SortKey};

/// Immutable snapshot of everything the client displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub(super) results: Vec<Car>,
    pub(super) results_page: usize,
    pub(super) wishlist: Wishlist,
    pub(super) wishlist_page: usize,
    pub(super) wishlist_search: String,
    pub(super) sort: SortKey,
    pub(super) theme: Theme,
    pub(super) loading: bool,
    pub(super) filters_visible: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            results_page: 1,
            wishlist: Wishlist::new(),
            wishlist_page: 1,
            wishlist_search: String::new(),
            sort: SortKey::None,
            theme: Theme::Light,
            loading: false,
            filters_visible: false,
        }
    }
}

impl ListState {
    pub fn results(&self) -> &[Car] {
        &self.results
    }

    pub fn results_page_number(&self) -> usize {
        self.results_page
    }

    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub fn wishlist_page_number(&self) -> usize {
        self.wishlist_page
    }

    pub fn wishlist_search(&self) -> &str {
        &self.wishlist_search
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filters_visible(&self) -> bool {
        self.filters_visible
    }

    pub fn is_in_wishlist(&self, id: u64) -> bool {
        self.wishlist.contains(id)
    }

    /// The current page of search results.
    pub fn results_page(&self, config: &ListConfig) -> Page<Car> {
        Page::of(&self.results, self.results_page, config.results_page_size)
    }

    /// The wishlist sorted by the current key, then narrowed to cars whose
    /// brand contains the search text (case-insensitive).
    pub fn wishlist_view(&self) -> Vec<Car> {
        let mut cars = self.wishlist.cars().to_vec();
        self.sort.sort(&mut cars);
        let needle = self.wishlist_search.to_lowercase();
        cars.retain(|car| car.brand.to_lowercase().contains(&needle));
        cars
    }

    /// The current page of the sorted, filtered wishlist view.
    pub fn wishlist_page(&self, config: &ListConfig) -> Page<Car> {
        Page::of(
            &self.wishlist_view(),
            self.wishlist_page,
            config.wishlist_page_size,
        )
    }
}
