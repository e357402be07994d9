//! Platform abstraction layer
//!
//! Handles browser/native differences for storage and wall-clock time.
//! On the web, storage is LocalStorage; native builds persist nothing
//! (the game targets wasm first, native exists for headless simulation
//! and tests).

/// Key/value persistence
pub mod storage {
    /// Read a stored string, None when absent or storage is unavailable
    #[cfg(target_arch = "wasm32")]
    pub fn get(key: &str) -> Option<String> {
        web_sys::window()?
            .local_storage()
            .ok()
            .flatten()?
            .get_item(key)
            .ok()
            .flatten()
    }

    /// Write a string; failures (quota, private mode) are logged and dropped
    #[cfg(target_arch = "wasm32")]
    pub fn set(key: &str, value: &str) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to persist {key}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn get(_key: &str) -> Option<String> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn set(_key: &str, _value: &str) {}
}

/// Milliseconds since the Unix epoch, used for run seeding
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as f64)
        .unwrap_or(0.0)
}
