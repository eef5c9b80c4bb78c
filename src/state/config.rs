/// What toggling a car into the wishlist does to the displayed results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleBehavior {
    /// Results are untouched.
    #[default]
    KeepResults,
    /// A car added to the wishlist is also removed from the results.
    RemoveFromResults,
}

/// Page sizes and behavior variants of the client list state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub results_page_size: usize,
    pub wishlist_page_size: usize,
    pub toggle_behavior: ToggleBehavior,
}

impl ListConfig {
    pub const RESULTS_PAGE_SIZE: usize = 5;
    pub const WISHLIST_PAGE_SIZE: usize = 10;

    pub fn with_toggle_behavior(mut self, behavior: ToggleBehavior) -> Self {
        self.toggle_behavior = behavior;
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            results_page_size: Self::RESULTS_PAGE_SIZE,
            wishlist_page_size: Self::WISHLIST_PAGE_SIZE,
            toggle_behavior: ToggleBehavior::default(),
        }
    }
}
