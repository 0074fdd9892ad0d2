//! Session token state and optional persistence.

use std::fs;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockWriteGuard};

/// Single-writer cell holding the current bearer token.
///
/// The auth gate is the only writer; request decoration reads concurrently.
/// Reads are fail-open: a poisoned lock reports no token rather than
/// erroring, so token retrieval can never fail a request.
#[derive(Debug, Default)]
pub struct TokenCell {
    inner: RwLock<Option<String>>,
}

impl TokenCell {
    pub fn new(initial: Option<String>) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    /// Current token, if one is held.
    pub fn get(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| (*guard).clone())
    }

    /// True iff a token is currently held.
    pub fn is_present(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    pub fn set(&self, token: String) {
        *self.write_guard() = Some(token);
    }

    pub fn clear(&self) {
        *self.write_guard() = None;
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Best-effort persistence for the session token.
///
/// The durable copy is a convenience, not a contract: failures to read,
/// write, or remove it are logged and swallowed, since losing it only means
/// the user signs in again.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: Option<PathBuf>,
}

impl TokenStore {
    /// With `None` the store is inert and every operation is a no-op.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Read the persisted token, if one exists and is readable.
    pub fn load(&self) -> Option<String> {
        let path = self.path.as_deref()?;
        match fs::read_to_string(path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(error) => {
                tracing::debug!("no persisted token at {}: {}", path.display(), error);
                None
            }
        }
    }

    pub fn save(&self, token: &str) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(error) = fs::create_dir_all(parent) {
                    tracing::warn!(
                        "failed to create token directory {}: {}",
                        parent.display(),
                        error
                    );
                    return;
                }
            }
        }
        if let Err(error) = fs::write(path, token) {
            tracing::warn!("failed to persist token to {}: {}", path.display(), error);
        }
    }

    pub fn forget(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Err(error) = fs::remove_file(path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    "failed to remove persisted token {}: {}",
                    path.display(),
                    error
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_starts_empty_by_default() {
        let cell = TokenCell::default();
        assert!(cell.get().is_none());
        assert!(!cell.is_present());
    }

    #[test]
    fn cell_set_get_clear() {
        let cell = TokenCell::new(None);
        cell.set("token-123".to_string());
        assert_eq!(cell.get().as_deref(), Some("token-123"));
        assert!(cell.is_present());

        cell.clear();
        assert!(cell.get().is_none());
        assert!(!cell.is_present());
    }

    #[test]
    fn cell_hydrates_from_initial_value() {
        let cell = TokenCell::new(Some("persisted".to_string()));
        assert_eq!(cell.get().as_deref(), Some("persisted"));
    }

    #[test]
    fn store_round_trips_a_token() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(Some(dir.path().join("session").join("token")));

        assert!(store.load().is_none());

        store.save("abc123");
        assert_eq!(store.load().as_deref(), Some("abc123"));

        store.forget();
        assert!(store.load().is_none());
    }

    #[test]
    fn store_forget_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TokenStore::new(Some(dir.path().join("token")));
        store.forget();
        store.forget();
        assert!(store.load().is_none());
    }

    #[test]
    fn inert_store_is_a_no_op() {
        let store = TokenStore::new(None);
        store.save("abc123");
        assert!(store.load().is_none());
        store.forget();
    }

    #[test]
    fn store_ignores_surrounding_whitespace() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("token");
        std::fs::write(&path, "  abc123\n").expect("write");

        let store = TokenStore::new(Some(path));
        assert_eq!(store.load().as_deref(), Some("abc123"));
    }
}
