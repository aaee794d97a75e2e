//! One fetched page of listing items.

/// One batch of items returned by a single gateway fetch.
///
/// Created fresh per fetch and consumed once by the controller. Items keep
/// the order the store returned them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage<T> {
    items: Vec<T>,
    item_count: usize,
    requested_limit: usize,
    offset: usize,
}

impl<T> ResultPage<T> {
    /// Wraps the items fetched for a request at `offset` with `requested_limit`.
    ///
    /// ```
    /// use musiclist::listing::ResultPage;
    ///
    /// let page = ResultPage::new(vec!["a", "b"], 10, 0);
    /// assert_eq!(page.item_count(), 2);
    /// assert!(page.is_last_page());
    /// assert!(page.is_first_page());
    /// ```
    #[must_use]
    pub fn new(items: Vec<T>, requested_limit: usize, offset: usize) -> Self {
        Self {
            item_count: items.len(),
            items,
            requested_limit,
            offset,
        }
    }

    /// Number of items the store returned, before any client-side filtering.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub const fn requested_limit(&self) -> usize {
        self.requested_limit
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// True when the store returned fewer items than were asked for.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.item_count < self.requested_limit
    }

    #[must_use]
    pub const fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    /// True for an empty page at offset 0: the query matched nothing.
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        self.is_first_page() && self.item_count == 0
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
