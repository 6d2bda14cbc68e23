//! Session State Management
//!
//! This module manages the server-side session store. Each session is a bag
//! of JSON values keyed by string, scoped to one visitor and destroyed with
//! the session itself.

use dashmap::DashMap;
use serde_json::Value;
use std::collections::HashMap;

/// Key/value state held for one visitor
type SessionData = HashMap<String, Value>;

// =============================================================================
// Session Store
// =============================================================================

/// Server-side session store, keyed by session id.
///
/// DashMap allows concurrent access across sessions without external Mutexes.
/// Requests for the *same* session are assumed sequential; the surrounding
/// layer provides that, not this store.
pub struct SessionStore {
    sessions: DashMap<String, SessionData>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates an empty session store
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Opens the session with the given id, creating empty state the first
    /// time an id is touched.
    ///
    /// The handle works on its own snapshot of the session; nothing is
    /// visible to later opens until `save` is called.
    pub fn open(&self, id: impl Into<String>) -> SessionHandle<'_> {
        let id = id.into();
        let values = self
            .sessions
            .get(&id)
            .map(|entry| entry.clone())
            .unwrap_or_default();

        SessionHandle {
            store: self,
            id,
            values,
        }
    }
}

// =============================================================================
// Session Handle
// =============================================================================

/// Handle to one visitor's session state for the duration of a request.
pub struct SessionHandle<'a> {
    store: &'a SessionStore,
    id: String,
    values: SessionData,
}

impl SessionHandle<'_> {
    /// The session id this handle is bound to
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reads a value from the session, `None` when the key was never set
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Writes a value into the handle's session state
    pub fn set(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Persists the handle's state back into the store
    pub fn save(&self) {
        self.store
            .sessions
            .insert(self.id.clone(), self.values.clone());
    }
}
