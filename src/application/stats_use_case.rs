// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Orchestrates one statistics run:
//
//   Step 1: Validate the corpus root           (Layer 4 - data)
//   Step 2: Load the pronunciation dictionary  (Layer 6 - infra)
//           (required; a run without one is refused)
//   Step 3: Analyse every document             (Layer 4 - data)
//   Step 4: Collect summaries by fullname      (Layer 6 - infra)
//   Step 5: Write the timestamped JSON report  (Layer 6 - infra)
//
// A document that cannot be analysed is logged and skipped,
// so the report holds every document that could be scored.
// With fail_fast the first such error aborts the run instead.

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::data::{
    analyzer::DocumentAnalyzer,
    locator::CorpusLocator,
    sentences::SentenceSplitter,
};
use crate::domain::error::CguError;
use crate::domain::identity::Layout;
use crate::infra::{
    pronunciation::CmuDict,
    report::{report_filename, StatsReport},
};

// ─── Run Configuration ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    pub corpus_dir:        String,
    pub outdir:            String,
    pub layout:            Layout,
    /// CMU dictionary file, required to run
    pub cmudict:           Option<String>,
    pub include_top_level: bool,
    pub fail_fast:         bool,
}

impl StatsConfig {
    /// Report file prefix for this layout
    pub fn report_prefix(&self) -> &'static str {
        match self.layout {
            Layout::Current => "stats",
            Layout::Historical => "historical_stats",
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            corpus_dir:        "../CGUs-versions".to_string(),
            outdir:            "./reports".to_string(),
            layout:            Layout::Current,
            cmudict:           None,
            include_top_level: false,
            fail_fast:         false,
        }
    }
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report_path: PathBuf,
    pub analysed:    usize,
    pub skipped:     usize,
}

// ─── StatsUseCase ─────────────────────────────────────────────────────────────
pub struct StatsUseCase {
    config: StatsConfig,
}

impl StatsUseCase {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline and write the report
    pub fn execute(&self) -> Result<RunOutcome> {
        let cfg = &self.config;
        tracing::info!("Generating stats for data in {}", cfg.corpus_dir);

        // ── Step 1: Validate the corpus root ─────────────────────────────────
        let locator = CorpusLocator::new(&cfg.corpus_dir)?;
        tracing::debug!("Corpus root: {}", locator.root().display());

        // ── Step 2: Reference data, loaded once for the run ──────────────────
        let dict = self.load_dictionary()?;
        let splitter = SentenceSplitter::new();
        let analyzer = DocumentAnalyzer::new(&splitter, &dict);

        // ── Steps 3-4: Analyse and collect ───────────────────────────────────
        let (report, skipped) = self.build_report(&locator, &analyzer)?;

        // ── Step 5: Save ─────────────────────────────────────────────────────
        let filename = report_filename(cfg.report_prefix(), Local::now());
        let report_path = report.save(Path::new(&cfg.outdir), &filename)?;

        tracing::info!(
            "Saved stats in {} ({} documents, {} skipped)",
            report_path.display(),
            report.len(),
            skipped
        );

        Ok(RunOutcome {
            report_path,
            analysed: report.len(),
            skipped,
        })
    }

    fn load_dictionary(&self) -> Result<CmuDict> {
        let path = self.config.cmudict.as_deref().ok_or(CguError::LexiconNotConfigured)?;
        Ok(CmuDict::load(Path::new(path))?)
    }

    /// Analyse every document the locator yields.
    /// Returns the report and the number of skipped documents.
    pub fn build_report(
        &self,
        locator:  &CorpusLocator,
        analyzer: &DocumentAnalyzer<'_>,
    ) -> Result<(StatsReport, usize)> {
        let cfg = &self.config;
        let mut report = StatsReport::new();
        let mut skipped = 0usize;

        for (index, path) in locator.documents(!cfg.include_top_level).enumerate() {
            tracing::debug!("{} - Handling: {}", index + 1, path.display());

            match analyzer.analyze_file(&path, cfg.layout) {
                Ok(doc) => report.insert(doc.fullname(), doc.to_summary()),
                Err(e) if cfg.fail_fast => {
                    return Err(e)
                        .with_context(|| format!("Failed to analyse '{}'", path.display()));
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", path.display(), e);
                    skipped += 1;
                }
            }
        }

        Ok((report, skipped))
    }
}
