//! services/app/src/web/state.rs
//!
//! Defines the service's shared state.

use crate::config::Config;
use smartx_core::SmartxClient;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// One device, one client: every request reads and writes the same preference store.
#[derive(Clone)]
pub struct AppState {
    pub client: SmartxClient,
    pub config: Arc<Config>,
}
