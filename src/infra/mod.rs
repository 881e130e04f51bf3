// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Reference data and output files:
//
//   pronunciation.rs — CMU Pronouncing Dictionary
//                      Parses the lexicon once per run and
//                      answers syllable counts for the
//                      document analyzer.
//
//   report.rs        — Stats report
//                      Collects per-document summaries and
//                      writes them to a timestamped JSON file.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// CMU pronunciation lexicon and syllable counting
pub mod pronunciation;

/// JSON report of all document summaries
pub mod report;
