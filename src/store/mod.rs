//! Bounded, deduplicated sample history
//!
//! The running log of looked-up samples: most recently touched first,
//! one entry per code, capped at [`HISTORY_CAPACITY`] entries, written
//! through to the secure storage after every mutation.

use crate::storage::SecureStorage;
use crate::types::{Sample, HISTORY_CAPACITY};
use tracing::warn;

/// Storage key under which the history snapshot is persisted.
pub const HISTORY_KEY: &str = "sample_history";

/// Ordered, deduplicated, capacity-bounded history of samples.
///
/// All mutating operations take `&mut self`, so a single instance can never
/// interleave persisted writes: each upsert or clear finishes its storage
/// write before the next one can start, and the persisted snapshot always
/// reflects the latest completed mutation.
pub struct HistoryStore {
    storage: Box<dyn SecureStorage>,
    entries: Vec<Sample>,
    capacity: usize,
    loaded: bool,
}

impl HistoryStore {
    pub fn new(storage: Box<dyn SecureStorage>) -> Self {
        Self::with_capacity(storage, HISTORY_CAPACITY)
    }

    pub fn with_capacity(storage: Box<dyn SecureStorage>, capacity: usize) -> Self {
        Self {
            storage,
            entries: Vec::new(),
            capacity,
            loaded: false,
        }
    }

    /// Whether the history was initialized from persistence.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the current entries, most recent first.
    pub fn snapshot(&self) -> &[Sample] {
        &self.entries
    }

    /// Load the persisted snapshot, replacing the in-memory entries.
    ///
    /// A missing, unreadable or corrupt snapshot degrades to an empty
    /// history; individually malformed records are dropped, not fatal.
    pub async fn load(&mut self) {
        self.entries = match self.storage.get(HISTORY_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
                Ok(records) => records
                    .into_iter()
                    .filter_map(|record| serde_json::from_value::<Sample>(record).ok())
                    .map(Sample::refill)
                    .filter(Sample::is_valid)
                    .take(self.capacity)
                    .collect(),
                Err(e) => {
                    warn!(error = %e, "history snapshot corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "history snapshot unreadable, starting empty");
                Vec::new()
            }
        };
        self.loaded = true;
    }

    /// Insert or refresh an entry, moving it to the front.
    ///
    /// Invalid samples (placeholder code) are ignored. Any existing entry
    /// with the same code is replaced; the oldest entry is evicted once the
    /// capacity is exceeded. The change is written through before returning.
    pub async fn upsert(&mut self, sample: Sample) {
        if !sample.is_valid() {
            return;
        }
        self.entries.retain(|entry| entry.code != sample.code);
        self.entries.insert(0, sample);
        self.entries.truncate(self.capacity);
        self.persist().await;
    }

    /// Empty the history and delete the persisted snapshot.
    pub async fn clear(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.delete(HISTORY_KEY).await {
            warn!(error = %e, "failed to delete history snapshot");
        }
    }

    /// Write the current entries to storage.
    ///
    /// Failures are logged and swallowed: losing the very latest entry on a
    /// crash after a failed write is an accepted trade-off for a field tool.
    async fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.entries) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "failed to serialize history");
                return;
            }
        };
        if let Err(e) = self.storage.set(HISTORY_KEY, &payload).await {
            warn!(error = %e, "failed to persist history");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::PLACEHOLDER;

    fn sample(code: &str, status: &str) -> Sample {
        Sample {
            code: code.to_string(),
            status: status.to_string(),
            ..Sample::default()
        }
    }

    #[tokio::test]
    async fn upsert_dedups_by_code_and_moves_to_front() {
        let mut store = HistoryStore::new(Box::new(MemoryStorage::new()));
        store.upsert(sample("A1", "Aguardando")).await;
        store.upsert(sample("A2", "Coletada")).await;
        store.upsert(sample("A1", "Coletada")).await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].code, "A1");
        assert_eq!(snapshot[0].status, "Coletada");
        assert_eq!(snapshot[1].code, "A2");
    }

    #[tokio::test]
    async fn capacity_evicts_oldest() {
        let mut store = HistoryStore::with_capacity(Box::new(MemoryStorage::new()), 3);
        for i in 1..=4 {
            store.upsert(sample(&format!("A{i}"), "Coletada")).await;
        }
        let codes: Vec<_> = store.snapshot().iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, ["A4", "A3", "A2"]);
    }

    #[tokio::test]
    async fn invalid_sample_is_ignored() {
        let mut store = HistoryStore::new(Box::new(MemoryStorage::new()));
        store.upsert(sample(PLACEHOLDER, "Coletada")).await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn load_marks_loaded_even_when_empty() {
        let mut store = HistoryStore::new(Box::new(MemoryStorage::new()));
        assert!(!store.is_loaded());
        store.load().await;
        assert!(store.is_loaded());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn corrupt_snapshot_degrades_to_empty() {
        let storage = MemoryStorage::new();
        use crate::storage::SecureStorage;
        storage.set(HISTORY_KEY, "not json at all").await.unwrap();

        let mut store = HistoryStore::new(Box::new(storage));
        store.load().await;
        assert!(store.is_loaded());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn malformed_entries_are_dropped_on_load() {
        let storage = MemoryStorage::new();
        use crate::storage::SecureStorage;
        storage
            .set(
                HISTORY_KEY,
                r#"[{"code":"A1","status":"Coletada"},{"status":"sem codigo"},42]"#,
            )
            .await
            .unwrap();

        let mut store = HistoryStore::new(Box::new(storage));
        store.load().await;
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].code, "A1");
        assert_eq!(snapshot[0].client, PLACEHOLDER);
    }

    #[tokio::test]
    async fn loaded_fields_are_trimmed_and_refilled() {
        let storage = MemoryStorage::new();
        use crate::storage::SecureStorage;
        storage
            .set(
                HISTORY_KEY,
                r#"[{"code":"A1","client":"","technician":"  ze  "},{"code":"   "}]"#,
            )
            .await
            .unwrap();

        let mut store = HistoryStore::new(Box::new(storage));
        store.load().await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].code, "A1");
        assert_eq!(snapshot[0].client, PLACEHOLDER);
        assert_eq!(snapshot[0].technician, "ze");
    }

    #[tokio::test]
    async fn clear_empties_and_deletes_snapshot() {
        let mut store = HistoryStore::new(Box::new(MemoryStorage::new()));
        store.upsert(sample("A1", "Coletada")).await;
        store.clear().await;
        assert!(store.is_empty());

        store.load().await;
        assert!(store.is_empty());
    }
}
