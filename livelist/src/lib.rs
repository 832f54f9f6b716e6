//! Incremental list synchronization for paginated, realtime-reconciled views.
//!
//! This crate is UI-framework agnostic so client crates can hold a
//! [`LiveList`] inside whatever reactive container they use. It owns the
//! non-I/O half of list loading: offset pagination state, merge-by-id with a
//! stable precedence rule, stale-response discard, tombstoned deletions, and
//! optimistic placeholders. Network calls stay with the caller; the list
//! hands out a [`LoadTicket`] describing the request to make and consumes the
//! outcome.

pub mod cursor;
pub mod list;

pub use cursor::PageCursor;
pub use list::{ListItem, LiveList, LoadTicket, SortOrder};
