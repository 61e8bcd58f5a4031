//! Lightweight preference storage (one JSON document per key).

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Object-safe boxed future used by [`PrefsStore`] async methods.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for small user preferences such as the presentation mode or shell overrides.
pub trait PrefsStore {
    /// Loads the raw JSON text stored under `key`.
    fn load_pref<'a>(&'a self, key: &'a str)
        -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores raw JSON text under `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store that remembers nothing.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(
        &'a self,
        _key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Creates a store pre-populated with one raw entry.
    pub fn seeded(key: impl Into<String>, raw_json: impl Into<String>) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.into(), raw_json.into());
        store
    }

    /// Raw text currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Loads and decodes a typed preference.
///
/// # Errors
///
/// Returns an error when the store fails or the stored JSON does not decode as `T`.
pub async fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, String> {
    let Some(raw) = store.load_pref(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| format!("preference `{key}` is malformed: {err}"))
}

/// Encodes and saves a typed preference.
///
/// # Errors
///
/// Returns an error when encoding or the store write fails.
pub async fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|err| err.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{PresentationMode, PRESENTATION_PREF_KEY};

    #[test]
    fn typed_presentation_pref_round_trips() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        block_on(save_pref_with(
            store_obj,
            PRESENTATION_PREF_KEY,
            &PresentationMode::Modern,
        ))
        .expect("save");
        assert_eq!(store.raw(PRESENTATION_PREF_KEY), Some("\"modern\"".to_string()));

        let loaded: Option<PresentationMode> =
            block_on(load_pref_with(store_obj, PRESENTATION_PREF_KEY)).expect("load");
        assert_eq!(loaded, Some(PresentationMode::Modern));
    }

    #[test]
    fn missing_pref_loads_as_none() {
        let loaded: Option<PresentationMode> =
            block_on(load_pref_with(&NoopPrefsStore, PRESENTATION_PREF_KEY)).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn malformed_pref_reports_key() {
        let store = MemoryPrefsStore::seeded(PRESENTATION_PREF_KEY, "{not json");
        let err = block_on(load_pref_with::<_, PresentationMode>(
            &store,
            PRESENTATION_PREF_KEY,
        ))
        .expect_err("malformed");
        assert!(err.contains(PRESENTATION_PREF_KEY), "{err}");
    }
}
