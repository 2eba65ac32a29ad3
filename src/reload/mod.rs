// src/reload/mod.rs

//! Serving and live reload.
//!
//! This module ties together:
//! - the static file server for the built HTML
//! - the WebSocket endpoint browsers connect to for reload signals
//! - the script injection that wires served pages onto that endpoint
//!
//! The orchestrator only sees [`ReloadHub::notify_reload`]; everything else
//! here is transport.

pub mod hub;
pub mod inject;
pub mod server;

pub use hub::ReloadHub;
pub use inject::{RELOAD_SCRIPT_TAG, insert_script_tag};
pub use server::ReloadServer;
