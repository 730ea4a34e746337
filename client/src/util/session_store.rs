//! localStorage-backed persistence for the auth slice.
//!
//! DESIGN
//! ======
//! Fail-open: any read or write fault degrades to an empty snapshot
//! ("logged out, not yet verified") with a warning in the console, so a
//! storage fault can never block startup or crash the app. Writes are
//! fire-and-forget; no caller awaits their outcome.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use authflow::session::{STORAGE_KEY, SessionSnapshot};

/// Load the last persisted snapshot, or `None` when storage is empty,
/// unavailable, or unreadable.
pub fn load() -> Option<SessionSnapshot> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                log::warn!("discarding unreadable auth snapshot: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the snapshot, best effort.
pub fn persist(snapshot: &SessionSnapshot) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; auth snapshot not persisted");
            return;
        };
        let raw = match serde_json::to_string(snapshot) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize auth snapshot: {e}");
                return;
            }
        };
        if storage.set_item(STORAGE_KEY, &raw).is_err() {
            log::warn!("failed to write auth snapshot");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = snapshot;
    }
}
