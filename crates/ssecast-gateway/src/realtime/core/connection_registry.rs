use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::realtime::types::{Connection, Registration};

struct Entry {
    conn: Connection,
    seq: u64,
}

/// One (id, connection) pair captured by `snapshot`.
#[derive(Debug, Clone)]
pub struct SnapshotEntry {
    pub id: String,
    pub conn: Connection,
    pub seq: u64,
}

/// Connection registry: `client_id -> Connection`.
///
/// A single map behind one lock, so inserts, removals and snapshots are atomic
/// with respect to each other. Callers never write to a connection while the
/// lock is held.
pub struct ConnectionRegistry {
    entries: RwLock<HashMap<String, Entry>>,
    seq: AtomicU64,
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            seq: AtomicU64::new(1),
        }
    }

    /// Insert or replace the entry for `id`.
    ///
    /// A replaced connection is dropped here; once no snapshot holds it any
    /// more its stream ends.
    pub fn register(&self, id: impl Into<String>, conn: Connection) -> Registration {
        let id = id.into();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);

        let prev = self
            .entries
            .write()
            .insert(id.clone(), Entry { conn, seq });

        if let Some(prev) = prev {
            tracing::info!(client_id = %id, old_seq = prev.seq, seq, "connection superseded");
        }
        Registration::new(id, seq)
    }

    /// Remove whatever is registered under `id`. No-op if absent.
    pub fn unregister(&self, id: &str) -> Option<Connection> {
        self.entries.write().remove(id).map(|e| e.conn)
    }

    /// Remove the entry only if it still belongs to `reg`.
    pub fn unregister_session(&self, reg: &Registration) -> bool {
        self.remove_if_current(reg.id(), reg.seq())
    }

    pub(crate) fn remove_if_current(&self, id: &str, seq: u64) -> bool {
        let mut entries = self.entries.write();
        match entries.get(id) {
            Some(e) if e.seq == seq => {
                entries.remove(id);
                true
            }
            _ => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<Connection> {
        self.entries.read().get(id).map(|e| e.conn.clone())
    }

    pub(crate) fn lookup(&self, id: &str) -> Option<(Connection, u64)> {
        self.entries.read().get(id).map(|e| (e.conn.clone(), e.seq))
    }

    /// Sorted ids of every registered connection.
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Point-in-time copy of all entries.
    pub fn snapshot(&self) -> Vec<SnapshotEntry> {
        self.entries
            .read()
            .iter()
            .map(|(id, e)| SnapshotEntry {
                id: id.clone(),
                conn: e.conn.clone(),
                seq: e.seq,
            })
            .collect()
    }

    /// Visit a snapshot; `f` may freely call back into the registry.
    pub fn for_each(&self, mut f: impl FnMut(&str, &Connection)) {
        for entry in self.snapshot() {
            f(&entry.id, &entry.conn);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every entry (process teardown). Returns how many were removed.
    pub fn clear(&self) -> usize {
        let drained: Vec<Entry> = self.entries.write().drain().map(|(_, e)| e).collect();
        drained.len()
    }
}
