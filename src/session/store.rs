use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::{IntakeError, Result};
use crate::utils::persistence::{load_json, save_json};

use super::Session;

/// Persistence for the admin session.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Session>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Session>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Session> {
        self.session
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| IntakeError::Storage("session lock poisoned".into()))
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| IntakeError::Storage("session lock poisoned".into()))?;
        *guard = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.save(&Session::default())
    }
}

/// Session kept in a small JSON file next to the configuration.
#[derive(Debug, Clone)]
pub struct JsonSessionStore {
    path: PathBuf,
}

impl JsonSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Result<Session> {
        Ok(load_json(&self.path)?.unwrap_or_default())
    }

    fn save(&self, session: &Session) -> Result<()> {
        save_json(session, &self.path)
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
