//! Browser `localStorage` access for persisted quiz results and game stats.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has no backend; everything that survives a reload goes through
//! these helpers. Reads and writes are hydrate-only. Under SSR and in native
//! tests every call is a no-op that reports "nothing stored", so server
//! rendering always produces the empty/loading markup.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Load a JSON value from `localStorage` for `key`.
///
/// Malformed blobs are logged and treated as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed {key} in localStorage: {e}");
            None
        }
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("failed to encode {key}: {e}");
            return;
        }
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("localStorage rejected write for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = raw;
    }
}

/// Delete `key` from `localStorage`. Returns `true` when the delete went
/// through; failures are logged.
pub fn remove(key: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable; {key} not removed");
            return false;
        };
        if storage.remove_item(key).is_err() {
            log::warn!("localStorage rejected delete for {key}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        false
    }
}
