//! Session Store
//!
//! Bearer token and cached user profile kept in durable key/value storage
//! (`localStorage` in the browser, memory in tests).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::models::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("stored user profile is corrupt: {0}")]
    CorruptUser(#[from] serde_json::Error),
}

/// Durable string storage, shaped like the Web Storage API
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> SessionResult<()>;
    fn remove_item(&self, key: &str);
}

/// Shared in-memory storage; clones see the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Token + user accessors over a storage backend
#[derive(Debug, Clone)]
pub struct Session<S> {
    storage: S,
}

impl<S: SessionStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) -> SessionResult<()> {
        self.storage.set_item(TOKEN_KEY, token)
    }

    pub fn remove_token(&self) {
        self.storage.remove_item(TOKEN_KEY);
    }

    /// Cached profile; `Ok(None)` when nothing is stored
    pub fn get_user(&self) -> SessionResult<Option<User>> {
        match self.storage.get_item(USER_KEY) {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_user(&self, user: &User) -> SessionResult<()> {
        let raw = serde_json::to_string(user).map_err(|e| SessionError::Storage(e.to_string()))?;
        self.storage.set_item(USER_KEY, &raw)
    }

    pub fn remove_user(&self) {
        self.storage.remove_item(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    /// Store token and user together after login/register
    pub fn begin(&self, token: &str, user: &User) -> SessionResult<()> {
        self.set_token(token)?;
        self.set_user(user)
    }

    /// Clear token and user. Returning to the root view is up to the caller.
    pub fn logout(&self) {
        log::info!("Clearing session");
        self.remove_token();
        self.remove_user();
    }
}
