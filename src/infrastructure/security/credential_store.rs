// src/infrastructure/security/credential_store.rs
use crate::application::ports::credential_store::CredentialStore;
use crate::domain::credential::{Credential, CredentialKind};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type CredentialMap = HashMap<String, Credential>;

/// Two independently locked maps, one per credential kind.
///
/// Entries are plain data written in a single `insert`, so a poisoned lock
/// still guards a consistent map and is recovered rather than propagated.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    codes: RwLock<CredentialMap>,
    tokens: RwLock<CredentialMap>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: CredentialKind) -> &RwLock<CredentialMap> {
        match kind {
            CredentialKind::AuthorizationCode => &self.codes,
            CredentialKind::AccessToken => &self.tokens,
        }
    }

    fn read(&self, kind: CredentialKind) -> RwLockReadGuard<'_, CredentialMap> {
        self.map(kind).read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, kind: CredentialKind) -> RwLockWriteGuard<'_, CredentialMap> {
        self.map(kind).write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn put(&self, kind: CredentialKind, credential: Credential) {
        self.write(kind).insert(credential.value.clone(), credential);
    }

    fn get(&self, kind: CredentialKind, key: &str) -> Option<Credential> {
        self.read(kind).get(key).cloned()
    }

    fn delete(&self, kind: CredentialKind, key: &str) {
        self.write(kind).remove(key);
    }

    fn take(&self, kind: CredentialKind, key: &str) -> Option<Credential> {
        self.write(kind).remove(key)
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        [CredentialKind::AuthorizationCode, CredentialKind::AccessToken]
            .into_iter()
            .map(|kind| {
                let mut guard = self.write(kind);
                let before = guard.len();
                guard.retain(|_, entry| !entry.is_expired(now));
                before - guard.len()
            })
            .sum()
    }

    fn len(&self, kind: CredentialKind) -> usize {
        self.read(kind).len()
    }
}

pub fn into_arc(store: InMemoryCredentialStore) -> Arc<dyn CredentialStore> {
    Arc::new(store)
}
