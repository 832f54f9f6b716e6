//! Offset/page-size/has-more bookkeeping for one paginated list.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Pagination state for a single list view.
///
/// The cursor never issues network calls; callers read [`PageCursor::offset`]
/// and [`PageCursor::page_size`] to build the next request and feed the
/// outcome back through [`PageCursor::complete`]. The first page is fetched
/// with a larger size than follow-on pages so the view fills fast while
/// increments stay cheap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    offset: usize,
    initial_page: usize,
    follow_page: usize,
    has_more: bool,
}

impl PageCursor {
    /// Create a cursor at offset zero with the given page sizes.
    #[must_use]
    pub fn new(initial_page: usize, follow_page: usize) -> Self {
        Self {
            offset: 0,
            initial_page,
            follow_page,
            has_more: true,
        }
    }

    /// Return to the initial state: offset zero, more assumed available.
    pub fn reset(&mut self) {
        self.offset = 0;
        self.has_more = true;
    }

    /// Number of items fetched so far; the next request's starting index.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the last completed fetch indicated further items exist.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Page size for the next request: the larger initial size while nothing
    /// has been fetched yet, the smaller follow-on size afterwards.
    #[must_use]
    pub fn page_size(&self) -> usize {
        if self.offset == 0 {
            self.initial_page
        } else {
            self.follow_page
        }
    }

    /// Record a successful fetch. The offset advances by the number of items
    /// actually received (the server-side index, unaffected by client-side
    /// dedup) and `has_more` drops once a batch comes back short.
    pub fn complete(&mut self, received: usize, requested: usize) {
        self.offset += received;
        self.has_more = received >= requested;
    }
}
