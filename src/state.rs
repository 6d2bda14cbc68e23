//! Application State
//!
//! This module wires together the shared pieces every request handler needs:
//! the product catalog and the server-side session store.

use crate::catalog::MemoryCatalog;
use crate::session::SessionStore;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and the session store
pub struct AppState {
    /// Read-only product catalog
    pub catalog: MemoryCatalog,

    /// Server-side session state, one entry per visitor
    pub sessions: SessionStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates application state with the sample catalog and no sessions
    pub fn new() -> Self {
        Self {
            catalog: MemoryCatalog::sample(),
            sessions: SessionStore::new(),
        }
    }

    /// Creates application state around a specific catalog
    pub fn with_catalog(catalog: MemoryCatalog) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
        }
    }
}
