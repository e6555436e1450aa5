//! Application service layer
//!
//! Ties the pipeline together for the UI and CLI: payload in, normalized
//! row out, history maintained and exportable.

use crate::error::{Error, Result};
use crate::export::{self, ExportFile};
use crate::normalize::normalize;
use crate::storage::SecureStorage;
use crate::store::HistoryStore;
use crate::types::Sample;
use serde_json::Value;
use tracing::debug;

/// Front door for the lookup flow: normalize a payload, log the row,
/// offer the history for display and export.
pub struct LookupService {
    history: HistoryStore,
}

impl LookupService {
    /// Build a service over the given storage and load the persisted history.
    pub async fn open(storage: Box<dyn SecureStorage>) -> Self {
        let mut history = HistoryStore::new(storage);
        history.load().await;
        Self { history }
    }

    /// Normalize a lookup payload and record the row in the history.
    ///
    /// Rows whose code did not resolve are still returned for display but
    /// are not logged.
    pub async fn record_lookup(&mut self, payload: &Value, queried_code: &str) -> Sample {
        let sample = normalize(payload, queried_code);
        debug!(code = %sample.code, "normalized lookup payload");
        self.history.upsert(sample.clone()).await;
        sample
    }

    /// The logged rows, most recent first.
    pub fn history(&self) -> &[Sample] {
        self.history.snapshot()
    }

    pub async fn clear_history(&mut self) {
        self.history.clear().await;
    }

    /// Tab-delimited export of the history for the clipboard collaborator.
    pub fn export_text(&self) -> Result<String> {
        let rows = self.history.snapshot();
        if rows.is_empty() {
            return Err(Error::EmptyHistory);
        }
        Ok(export::to_delimited(rows))
    }

    /// Workbook export of the history for the file-share collaborator.
    pub fn export_workbook(&self, file_prefix: &str) -> Result<ExportFile> {
        let rows = self.history.snapshot();
        if rows.is_empty() {
            return Err(Error::EmptyHistory);
        }
        export::to_workbook(rows, file_prefix)
    }
}
