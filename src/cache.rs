//! Explicit time-to-live caches for values derived from the vendor API.
//!
//! Both caches hold {value, issued_at, ttl} and check staleness on read; the
//! owner refreshes synchronously on a miss. Concurrent refreshes may race and
//! issue duplicate vendor calls, which is tolerated because the results are
//! idempotent and interchangeable.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

struct Entry<V> {
    value: V,
    issued_at: DateTime<Utc>,
}

impl<V> Entry<V> {
    fn new(value: V) -> Self {
        Self {
            value,
            issued_at: Utc::now(),
        }
    }

    fn is_fresh(&self, ttl: Duration) -> bool {
        Utc::now() - self.issued_at < ttl
    }
}

/// Single-slot cache, for the one value derived from the process-wide
/// credential.
pub struct TtlCell<V> {
    slot: Mutex<Option<Entry<V>>>,
    ttl: Duration,
}

impl<V: Clone> TtlCell<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Mutex::new(None),
            ttl,
        }
    }

    pub fn get(&self) -> Option<V> {
        let guard = self.slot.lock().ok()?;
        let entry = guard.as_ref()?;
        if entry.is_fresh(self.ttl) {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub fn put(&self, value: V) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(Entry::new(value));
        }
    }
}

/// Keyed cache, for one table per (workbook, worksheet) address.
pub struct TtlCache<K, V> {
    entries: Mutex<HashMap<K, Entry<V>>>,
    ttl: Duration,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let guard = self.entries.lock().ok()?;
        let entry = guard.get(key)?;
        if entry.is_fresh(self.ttl) {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub fn put(&self, key: K, value: V) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.insert(key, Entry::new(value));
        }
    }
}
