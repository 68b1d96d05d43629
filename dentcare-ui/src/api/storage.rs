use dentcare::session::{SessionStorage, StorageError, StorageResult};

/// Session backend over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
}

impl SessionStorage for LocalStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dentcare::session::{SessionStore, TOKEN_KEY, USER_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let storage = LocalStorage;
        storage.write(TOKEN_KEY, "abc123").unwrap();
        assert_eq!(storage.read(TOKEN_KEY).unwrap().as_deref(), Some("abc123"));

        storage.delete(TOKEN_KEY).unwrap();
        assert_eq!(storage.read(TOKEN_KEY).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_token_without_user_is_no_session() {
        let storage = LocalStorage;
        storage.delete(USER_KEY).unwrap();
        storage.write(TOKEN_KEY, "abc123").unwrap();

        let mut store = SessionStore::new(storage);
        assert!(store.restore().is_none());

        storage.delete(TOKEN_KEY).unwrap();
    }
}
