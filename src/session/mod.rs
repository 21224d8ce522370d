//! Admin session state: the bearer token and the signed-in email.
//!
//! The context is created once and handed to the REST client explicitly. It
//! is initialized on login and invalidated on logout or on any 401.

pub mod store;

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub use store::{JsonSessionStore, MemorySessionStore, SessionStore};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

pub struct SessionContext {
    store: Box<dyn SessionStore>,
    current: RwLock<Session>,
}

impl SessionContext {
    /// Loads whatever the store holds; an unreadable store starts signed out.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let current = match store.load() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session");
                Session::default()
            }
        };
        Self {
            store,
            current: RwLock::new(current),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemorySessionStore::default()))
    }

    pub fn snapshot(&self) -> Session {
        self.current
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn token(&self) -> Option<String> {
        self.snapshot().token.filter(|token| !token.is_empty())
    }

    pub fn email(&self) -> Option<String> {
        self.snapshot().email
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }

    pub fn sign_in(&self, token: impl Into<String>, email: impl Into<String>) -> Result<()> {
        let session = Session {
            token: Some(token.into()),
            email: Some(email.into()),
        };
        self.store.save(&session)?;
        if let Ok(mut guard) = self.current.write() {
            *guard = session;
        }
        Ok(())
    }

    /// Drops the token and email. In-memory state is cleared even when the
    /// backing store cannot be updated.
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.current.write() {
            *guard = Session::default();
        }
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }
    }
}
