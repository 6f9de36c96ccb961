//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` context. The nav bar, rating panel, and
//! booking modal read it to decide what to render and which bearer token to
//! send; the login page and logout button mutate it.
//!
//! Persistence is an explicit port: every transition takes the
//! `KeyValueStore` to mirror into, so tests drive it with `MemoryStore`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::config::SESSION_STORAGE_KEY;
use crate::net::api::bearer;
use crate::net::types::User;
use crate::util::storage::{KeyValueStore, load_json, remove_key, save_json};

/// Authenticated identity and bearer credential.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
}

impl SessionState {
    /// Read the persisted session once at startup.
    ///
    /// Anything other than a well-formed `{ user, token }` object reads as
    /// logged out.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        load_json(store, SESSION_STORAGE_KEY).unwrap_or_default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value while authenticated.
    pub fn bearer_header(&self) -> Option<String> {
        self.token.as_deref().map(bearer)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// Replace both fields and mirror the result to storage.
    pub fn login(&mut self, store: &impl KeyValueStore, user: Option<User>, token: Option<String>) {
        self.user = user;
        self.token = token;
        self.sync(store);
    }

    /// Clear both fields and drop the persisted entry.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        self.user = None;
        self.token = None;
        self.sync(store);
    }

    /// Persist while both fields are set; otherwise remove the entry.
    fn sync(&self, store: &impl KeyValueStore) {
        if self.user.is_some() && self.token.is_some() {
            save_json(store, SESSION_STORAGE_KEY, self);
        } else {
            remove_key(store, SESSION_STORAGE_KEY);
        }
    }
}
