//! Hooks shared by the components

use crate::storage::{default_store, load_json, save_json, KeyValueStore};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Signal persisted to local storage under `key`.
///
/// The stored value is read once on mount; when it is absent or cannot be
/// decoded, `init` provides the value instead. Every change is written back.
/// Changing `key` after mount has no effect.
pub fn use_local_storage<T>(key: impl Into<String>, init: impl FnOnce() -> T) -> Signal<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    let key: String = key.into();
    let store = use_hook(default_store);

    let signal = use_signal({
        let store = store.clone();
        let key = key.clone();
        move || restore_or(store.as_ref(), &key, init)
    });

    use_effect(move || {
        let value = signal.read();
        persist(store.as_ref(), &key, &*value);
    });

    signal
}

/// Stored value under `key`, or `init()` when it is absent or unreadable.
pub(crate) fn restore_or<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    init: impl FnOnce() -> T,
) -> T {
    match load_json(store, key) {
        Ok(Some(value)) => {
            debug!("Restored '{}' from storage", key);
            value
        }
        Ok(None) => init(),
        Err(e) => {
            warn!("Ignoring stored '{}': {}", key, e);
            init()
        }
    }
}

pub(crate) fn persist<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    if let Err(e) = save_json(store, key, value) {
        warn!("Failed to persist '{}': {}", key, e);
    }
}
