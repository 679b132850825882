/// Offset-based slice of an ordered listing
///
/// # Example
/// ```
/// use clintrack_db::repository::pagination::PageRequest;
///
/// let latest_five = PageRequest::first(5);
/// assert_eq!(latest_five.offset, 0);
/// assert_eq!(PageRequest::new(10, 20).apply(0..100).first(), Some(&20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// The first `limit` items of a listing
    pub fn first(limit: usize) -> Self {
        Self { limit, offset: 0 }
    }

    /// Apply the page to an already ordered iterator
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items.into_iter().skip(self.offset).take(self.limit).collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}
