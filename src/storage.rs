//! Browser Session Storage
//!
//! `window.localStorage` behind the client's `SessionStorage` trait.

use taskboard_client::session::{SessionError, SessionResult, SessionStorage};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> SessionResult<()> {
        let storage = local_storage()
            .ok_or_else(|| SessionError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("Failed to remove {} from localStorage: {:?}", key, e);
        }
    }
}
