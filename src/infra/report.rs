// ============================================================
// Layer 6 — Stats Report
// ============================================================
// Collects document summaries keyed by fullname and writes
// them as a single JSON object:
//
//   {
//     "FakeService - Community Guidelines": {
//       "document_type": "Community Guidelines",
//       "num_words": 29,
//       "readability": 91.54,
//       "readability_grade_level": 2.29
//     },
//     ...
//   }
//
// Output file: <outdir>/<prefix>_YYYYmmdd_HHMMSS.json

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::DocumentSummary;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsReport {
    documents: BTreeMap<String, DocumentSummary>,
}

impl StatsReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a summary. A repeated fullname replaces the earlier entry.
    pub fn insert(&mut self, fullname: String, summary: DocumentSummary) {
        if let Some(previous) = self.documents.insert(fullname, summary) {
            tracing::warn!(
                "Duplicate document name, replacing earlier entry ({} words)",
                previous.num_words
            );
        }
    }

    pub fn get(&self, fullname: &str) -> Option<&DocumentSummary> {
        self.documents.get(fullname)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Cannot serialise stats report")
    }

    /// Write the report into `outdir`, creating it if needed.
    /// Returns the full path of the written file.
    pub fn save(&self, outdir: &Path, filename: &str) -> Result<PathBuf> {
        fs::create_dir_all(outdir)
            .with_context(|| format!("Cannot create output directory '{}'", outdir.display()))?;

        let full_path = outdir.join(filename);
        fs::write(&full_path, self.to_json()?)
            .with_context(|| format!("Cannot write report '{}'", full_path.display()))?;

        tracing::debug!("Wrote {} entries to '{}'", self.len(), full_path.display());
        Ok(full_path)
    }
}

/// `stats_20240131_142501.json`-style name for a run started at `at`
pub fn report_filename(prefix: &str, at: DateTime<Local>) -> String {
    format!("{}_{}.json", prefix, at.format("%Y%m%d_%H%M%S"))
}
