//! Feed state: the public timeline of approved posts.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use livelist::{LiveList, SortOrder};

use crate::net::types::Post;
use crate::state::{FOLLOW_PAGE_SIZE, INITIAL_PAGE_SIZE};

/// State for the feed page.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    pub posts: LiveList<Post>,
    /// Free-text search; applied debounced.
    pub search: String,
    pub sort: SortOrder,
    pub error: Option<String>,
    pub compose_pending: bool,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            posts: LiveList::new(SortOrder::NewestFirst, INITIAL_PAGE_SIZE, FOLLOW_PAGE_SIZE),
            search: String::new(),
            sort: SortOrder::NewestFirst,
            error: None,
            compose_pending: false,
        }
    }
}
