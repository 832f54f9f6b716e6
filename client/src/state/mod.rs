//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `feed`, `admin`, etc.) so individual
//! components can depend on small focused models. Each struct is plain data
//! held in an `RwSignal` context; every list-bearing state owns its
//! `LiveList` exclusively for the page's lifetime.

pub mod admin;
pub mod auth;
pub mod conn;
pub mod feed;
pub mod messages;
pub mod profile;

/// Page size for the first fetch of any list: large enough to fill the view.
pub const INITIAL_PAGE_SIZE: usize = 10;

/// Page size for follow-on fetches: small, cheap increments.
pub const FOLLOW_PAGE_SIZE: usize = 3;
