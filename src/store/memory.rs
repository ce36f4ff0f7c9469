//! In-process account store, used when no DSN is configured and in tests.

use async_trait::async_trait;
use std::collections::{HashMap, hash_map::Entry};
use tokio::sync::RwLock;

use super::{Account, AccountStore, StoreError};

#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn create_unique(
        &self,
        identity_key: &str,
        secret_hash: &str,
    ) -> Result<Account, StoreError> {
        // Check and insert under one write guard.
        let mut accounts = self.accounts.write().await;
        match accounts.entry(identity_key.to_string()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate),
            Entry::Vacant(slot) => {
                let account = Account::new(identity_key, secret_hash);
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }

    async fn find_by_key(&self, identity_key: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.read().await.get(identity_key).cloned())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_then_find() {
        let store = MemoryAccountStore::new();
        assert!(store.is_empty().await);
        let created = store.create_unique("alice", "$argon2id$hash").await.unwrap();
        let found = store.find_by_key("alice").await.unwrap();
        assert_eq!(found, Some(created));
        assert_eq!(store.find_by_key("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_key_rejected_and_first_kept() {
        let store = MemoryAccountStore::new();
        store.create_unique("alice", "first").await.unwrap();

        let result = store.create_unique("alice", "second").await;
        assert!(matches!(result, Err(StoreError::Duplicate)));

        let account = store.find_by_key("alice").await.unwrap().unwrap();
        assert_eq!(account.secret_hash, "first");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn identity_keys_are_case_sensitive() {
        let store = MemoryAccountStore::new();
        store.create_unique("alice", "h1").await.unwrap();
        store.create_unique("Alice", "h2").await.unwrap();
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_yield_one_account() {
        let store = Arc::new(MemoryAccountStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create_unique("alice", &format!("hash-{i}")).await
            }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.len().await, 1);
    }
}
