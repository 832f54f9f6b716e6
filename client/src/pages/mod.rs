//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it drives its list's load
//! cycle, reacts to reconnect resyncs, and delegates rendering details to
//! `components`.

pub mod admin;
pub mod feed;
pub mod login;
pub mod messages;
pub mod profile;
