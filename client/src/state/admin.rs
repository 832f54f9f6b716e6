//! Admin dashboard state: moderation queue and user management.
//!
//! DESIGN
//! ======
//! The two tabs keep separate lists with separate filters so switching tabs
//! does not clobber pagination progress on the other side.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use livelist::{LiveList, SortOrder};

use crate::net::types::{AccountRow, Post, RoleFilter, StatusFilter};
use crate::state::{FOLLOW_PAGE_SIZE, INITIAL_PAGE_SIZE};

/// Active admin dashboard tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Posts,
    Users,
}

/// State for the admin dashboard page.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminState {
    pub tab: AdminTab,
    pub posts: LiveList<Post>,
    pub post_status: StatusFilter,
    pub post_search: String,
    pub users: LiveList<AccountRow>,
    pub user_role: RoleFilter,
    pub user_search: String,
    pub error: Option<String>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            tab: AdminTab::Posts,
            posts: LiveList::new(SortOrder::NewestFirst, INITIAL_PAGE_SIZE, FOLLOW_PAGE_SIZE),
            post_status: StatusFilter::All,
            post_search: String::new(),
            users: LiveList::new(SortOrder::NewestFirst, INITIAL_PAGE_SIZE, FOLLOW_PAGE_SIZE),
            user_role: RoleFilter::All,
            user_search: String::new(),
            error: None,
        }
    }
}
