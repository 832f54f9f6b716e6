//! Networking modules for the HTTP + websocket boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `live_client` manages the websocket lifecycle
//! and event dispatch, `types` defines the shared wire schema, and `error`
//! classifies failures for the UI.

pub mod api;
pub mod error;
pub mod live_client;
pub mod types;
