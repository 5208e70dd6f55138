//! Exact-match deduplication of email bodies

use crate::types::DuplicateStatus;
use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::debug;

pub const UNIQUE_REASON: &str = "Unique email.";
pub const DUPLICATE_REASON: &str = "Duplicate detected: Similar email content found in the system.";

/// Storage for bodies that have already been processed
pub trait ContentStore: Send {
    fn contains(&self, body: &str) -> bool;
    fn insert(&mut self, body: String);
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime store. Grows without bound and is never persisted.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    seen: HashSet<String>,
}

impl ContentStore for InMemoryStore {
    fn contains(&self, body: &str) -> bool {
        self.seen.contains(body)
    }

    fn insert(&mut self, body: String) {
        self.seen.insert(body);
    }

    fn len(&self) -> usize {
        self.seen.len()
    }
}

/// Decides whether a body was seen before, recording it if not.
///
/// The lookup and the insert happen under one lock, so two identical bodies
/// arriving at the same time cannot both be reported unique.
#[derive(Debug)]
pub struct Deduplicator<S = InMemoryStore> {
    store: Mutex<S>,
}

impl Deduplicator<InMemoryStore> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::default())
    }
}

impl Default for Deduplicator<InMemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ContentStore> Deduplicator<S> {
    #[must_use]
    pub fn with_store(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Check `email_body` against everything seen so far
    pub fn is_duplicate(&self, email_body: &str) -> DuplicateStatus {
        let mut store = self.store.lock();

        if store.contains(email_body) {
            debug!(body_chars = email_body.len(), "Duplicate email body");
            return DuplicateStatus {
                is_duplicate: true,
                reason: DUPLICATE_REASON.into(),
            };
        }

        store.insert(email_body.to_string());
        DuplicateStatus {
            is_duplicate: false,
            reason: UNIQUE_REASON.into(),
        }
    }

    /// Number of distinct bodies seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}
