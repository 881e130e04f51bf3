// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a corpus directory on disk and an
// analysed Document.
//
//   corpus root
//       │
//       ▼
//   CorpusLocator     → finds every .md file
//       │
//       ▼
//   read_document     → loads raw text
//       │
//       ▼
//   WordTokenizer     → lower-cased alphanumeric words
//   SentenceSplitter  → sentence count
//       │
//       ▼
//   DocumentAnalyzer  → counts + scores → Document
//
// Each module is responsible for exactly one step.

/// Finds corpus documents under a root directory
pub mod locator;

/// Reads one document's text
pub mod loader;

/// Splits text into alphanumeric words
pub mod tokenizer;

/// Punkt sentence boundary detection for English
pub mod sentences;

/// Builds a Document from a path
pub mod analyzer;
