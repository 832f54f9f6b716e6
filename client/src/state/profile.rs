//! Profile page state: one user's public header and their posts.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use livelist::{LiveList, SortOrder};

use crate::net::types::{Post, UserProfile};
use crate::state::{FOLLOW_PAGE_SIZE, INITIAL_PAGE_SIZE};

/// State for the profile page.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    /// Route identity currently shown; realtime post events are applied only
    /// when their author matches.
    pub user_id: Option<String>,
    pub profile: Option<UserProfile>,
    pub loading: bool,
    pub posts: LiveList<Post>,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            user_id: None,
            profile: None,
            loading: false,
            posts: LiveList::new(SortOrder::NewestFirst, INITIAL_PAGE_SIZE, FOLLOW_PAGE_SIZE),
            error: None,
        }
    }
}

impl ProfileState {
    /// Swap to a different profile identity, discarding the previous one's
    /// header and collection.
    pub fn switch_to(&mut self, user_id: &str) {
        if self.user_id.as_deref() == Some(user_id) {
            return;
        }
        *self = Self {
            user_id: Some(user_id.to_owned()),
            loading: true,
            ..Self::default()
        };
    }
}
