//! Pagination helpers shared by the results and wishlist views.

/// One page of a derived list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// 1-based page number that was requested.
    pub number: usize,
    /// Total number of pages for the whole list.
    pub total_pages: usize,
    /// Length of the whole list the page was cut from.
    pub total_items: usize,
    pub items: Vec<T>,
}

impl<T: Clone> Page<T> {
    pub fn of(items: &[T], number: usize, size: usize) -> Self {
        Self {
            number,
            total_pages: page_count(items.len(), size),
            total_items: items.len(),
            items: paginate(items, number, size).to_vec(),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// The 1-based page `page` of `items`: the slice `[(page-1)*size, page*size)`
/// clamped to the list. Page 0, a zero size, or a page past the end is empty.
pub fn paginate<T>(items: &[T], page: usize, size: usize) -> &[T] {
    if page == 0 || size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(size).min(items.len());
    let end = page.saturating_mul(size).min(items.len());
    &items[start..end]
}

/// Number of pages needed to show `len` items, `size` per page.
pub fn page_count(len: usize, size: usize) -> usize {
    if size == 0 {
        0
    } else {
        len.div_ceil(size)
    }
}
