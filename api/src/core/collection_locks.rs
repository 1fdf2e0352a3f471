//! Per-collection read/write locks.
//!
//! Recreating a collection takes the write lock for its name; point writes and
//! searches take the read lock. Requests on different collections never wait
//! on each other. Only requests served by this process are coordinated.
//!
//! Entries live only while someone holds or waits on them: the last guard to
//! drop removes its name from the registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::{OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};

type Registry = HashMap<String, Arc<RwLock<()>>>;

#[derive(Clone, Default)]
pub struct CollectionLocks {
    inner: Arc<Mutex<Registry>>,
}

/// Holds a collection lock; releasing it prunes the registry entry if idle.
pub struct CollectionGuard<G> {
    guard: Option<G>,
    collection: String,
    locks: CollectionLocks,
}

pub type CollectionReadGuard = CollectionGuard<OwnedRwLockReadGuard<()>>;
pub type CollectionWriteGuard = CollectionGuard<OwnedRwLockWriteGuard<()>>;

impl CollectionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // A poisoned registry still holds valid locks.
        self.inner.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Arcs are only cloned under the registry mutex, so a strong count of 1
    /// seen under it means nobody holds or awaits this lock.
    fn lock_for(&self, collection: &str) -> Arc<RwLock<()>> {
        self.registry()
            .entry(collection.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(())))
            .clone()
    }

    fn prune(&self, collection: &str) {
        let mut map = self.registry();
        let idle = map
            .get(collection)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            map.remove(collection);
        }
    }

    fn wrap<G>(&self, collection: &str, guard: G) -> CollectionGuard<G> {
        CollectionGuard {
            guard: Some(guard),
            collection: collection.to_string(),
            locks: self.clone(),
        }
    }

    /// Shared access: upserts and searches.
    pub async fn read(&self, collection: &str) -> CollectionReadGuard {
        let guard = self.lock_for(collection).read_owned().await;
        self.wrap(collection, guard)
    }

    /// Exclusive access: drop + create (+ initial upsert).
    pub async fn write(&self, collection: &str) -> CollectionWriteGuard {
        let guard = self.lock_for(collection).write_owned().await;
        self.wrap(collection, guard)
    }

    /// Number of collections currently tracked.
    pub fn tracked(&self) -> usize {
        self.registry().len()
    }
}

impl<G> Drop for CollectionGuard<G> {
    fn drop(&mut self) {
        // Release the lock (and its Arc) before checking whether it is idle.
        drop(self.guard.take());
        self.locks.prune(&self.collection);
    }
}
