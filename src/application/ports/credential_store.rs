// src/application/ports/credential_store.rs
use crate::domain::credential::{Credential, CredentialKind};
use chrono::{DateTime, Utc};

/// Concurrency-safe home of outstanding authorization codes and access tokens.
///
/// The store only reports hits and misses; expiry policy belongs to the broker.
pub trait CredentialStore: Send + Sync {
    /// Insert or overwrite the entry keyed by `credential.value`.
    fn put(&self, kind: CredentialKind, credential: Credential);

    fn get(&self, kind: CredentialKind, key: &str) -> Option<Credential>;

    /// Removing an absent key is a no-op.
    fn delete(&self, kind: CredentialKind, key: &str);

    /// Atomically remove the entry and return it if it was present.
    ///
    /// At most one of any number of concurrent callers observes `Some`.
    fn take(&self, kind: CredentialKind, key: &str) -> Option<Credential>;

    /// Drop every entry that is expired at `now`; returns how many were removed.
    fn purge_expired(&self, now: DateTime<Utc>) -> usize;

    fn len(&self, kind: CredentialKind) -> usize;
}
