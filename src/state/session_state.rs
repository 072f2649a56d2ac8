// ============================================================================
// SESSION STATE - The single authenticated user, mirrored to durable storage
// ============================================================================

use crate::config::CONFIG;
use crate::models::SessionUser;
use crate::utils::{KeyValueStore, StorageError};

/// Holds at most one session user and keeps storage in sync with memory
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore<S: KeyValueStore> {
    user: Option<SessionUser>,
    storage: S,
    user_key: String,
    token_key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, &CONFIG.storage.user_key, &CONFIG.storage.token_key)
    }

    pub fn with_keys(storage: S, user_key: &str, token_key: &str) -> Self {
        Self {
            user: None,
            storage,
            user_key: user_key.to_string(),
            token_key: token_key.to_string(),
        }
    }

    /// Load the user saved by a previous visit. A corrupt entry is dropped.
    pub fn restore(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.reload();
        store
    }

    pub fn reload(&mut self) {
        match self.storage.load::<SessionUser>(&self.user_key) {
            Ok(Some(user)) => {
                log::info!("💾 [SESSION] Restored {} session for {}", user.role, user.id);
                self.user = Some(user);
            }
            Ok(None) => {
                self.user = None;
            }
            Err(StorageError::Deserialize(e)) => {
                log::warn!("⚠️ [SESSION] Discarding corrupt stored user: {}", e);
                self.storage.remove(&self.user_key);
                self.user = None;
            }
            Err(e) => {
                log::error!("❌ [SESSION] Storage unavailable: {}", e);
                self.user = None;
            }
        }
    }

    /// Replace any current session with `user`, in memory and in storage.
    /// The in-memory session is set even when storage fails.
    pub fn login(&mut self, user: SessionUser) -> Result<(), StorageError> {
        log::info!("🔐 [SESSION] Login {} ({})", user.id, user.role);
        self.user = Some(user);
        self.persist()
    }

    /// Same as `login`, also keeping the backend bearer token
    pub fn login_with_token(&mut self, user: SessionUser, token: &str) -> Result<(), StorageError> {
        self.storage.save(&self.token_key, &token.to_string())?;
        self.login(user)
    }

    /// Swap the stored user (profile edit). No-op without a session.
    pub fn update_user(&mut self, user: SessionUser) -> Result<(), StorageError> {
        if self.user.is_none() {
            log::warn!("⚠️ [SESSION] Ignoring profile update without a session");
            return Ok(());
        }
        self.user = Some(user);
        self.persist()
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("👋 [SESSION] Logout {}", user.id);
        }
        self.storage.remove(&self.user_key);
        self.storage.remove(&self.token_key);
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.storage.load::<String>(&self.token_key).ok().flatten()
    }

    fn persist(&self) -> Result<(), StorageError> {
        match &self.user {
            Some(user) => self.storage.save(&self.user_key, user),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::utils::MemoryStorage;

    fn farmer() -> SessionUser {
        SessionUser::new("F001", "John Farmer", Role::Farmer, "North Region", "farmer@test.com")
    }

    #[test]
    fn login_writes_memory_and_storage() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::with_keys(storage.clone(), "user", "token");

        store.login(farmer()).unwrap();

        assert_eq!(store.current_user().map(|u| u.role), Some(Role::Farmer));
        let saved: SessionUser = storage.load("user").unwrap().unwrap();
        assert_eq!(saved, farmer());
    }

    #[test]
    fn second_login_replaces_the_first() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::with_keys(storage.clone(), "user", "token");
        store.login(farmer()).unwrap();
        let admin = SessionUser::new("AD001", "Admin User", Role::Admin, "All Regions", "admin@test.com");

        store.login(admin.clone()).unwrap();

        assert_eq!(store.current_user(), Some(&admin));
        assert_eq!(storage.load::<SessionUser>("user").unwrap(), Some(admin));
    }

    #[test]
    fn logout_clears_user_and_token() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::with_keys(storage.clone(), "user", "token");
        store.login_with_token(farmer(), "jwt-123").unwrap();
        assert_eq!(store.token(), Some("jwt-123".to_string()));

        store.logout();

        assert!(!store.is_authenticated());
        assert!(!storage.contains("user"));
        assert!(!storage.contains("token"));
    }

    #[test]
    fn restore_reads_previous_session() {
        let storage = MemoryStorage::new();
        SessionStore::with_keys(storage.clone(), "user", "token").login(farmer()).unwrap();

        let mut restored = SessionStore::with_keys(storage, "user", "token");
        restored.reload();

        assert_eq!(restored.current_user(), Some(&farmer()));
    }

    #[test]
    fn restore_discards_corrupt_entry() {
        let storage = MemoryStorage::new();
        storage.insert_raw("user", "{\"id\": 42");

        let mut restored = SessionStore::with_keys(storage.clone(), "user", "token");
        restored.reload();

        assert!(restored.current_user().is_none());
        assert!(!storage.contains("user"));
    }

    #[test]
    fn update_requires_a_session() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::with_keys(storage.clone(), "user", "token");

        store.update_user(farmer()).unwrap();
        assert!(store.current_user().is_none());

        store.login(farmer()).unwrap();
        let mut renamed = farmer();
        renamed.name = "John K. Farmer".to_string();
        store.update_user(renamed.clone()).unwrap();

        assert_eq!(storage.load::<SessionUser>("user").unwrap(), Some(renamed));
    }
}
