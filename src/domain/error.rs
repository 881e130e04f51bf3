// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Every failure the core can report, one variant per kind.
// The application layer wraps these in anyhow with extra
// context; tests match on the variants directly.

use std::path::PathBuf;
use thiserror::Error;

/// Which quantity made a readability score undefined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroQuantity {
    Words,
    Sentences,
}

impl std::fmt::Display for ZeroQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeroQuantity::Words => write!(f, "words"),
            ZeroQuantity::Sentences => write!(f, "sentences"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CguError {
    /// Corpus root is missing
    #[error("{} does not exist", .0.display())]
    RootNotFound(PathBuf),

    /// Corpus root exists but is a file (or something else)
    #[error("{} is not a directory", .0.display())]
    RootNotADirectory(PathBuf),

    /// The path is too shallow to carry a service and a name
    #[error("cannot derive document identity from '{}': {reason}", path.display())]
    MalformedPath { path: PathBuf, reason: String },

    /// Historical file stem is not an ISO-8601 date/time
    #[error("'{stem}' in '{}' is not an ISO-8601 date", path.display())]
    MalformedVersionDate { path: PathBuf, stem: String },

    #[error("cannot read document '{}': {source}", path.display())]
    UnreadableDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Readability needs at least one word and one sentence
    #[error("readability is undefined: document has zero {0}")]
    UndecidableMetric(ZeroQuantity),

    /// Syllable counts need a dictionary; there is no fallback
    #[error("no pronunciation dictionary configured (use --cmudict or CGU_CMUDICT)")]
    LexiconNotConfigured,

    #[error("pronunciation dictionary '{}' has no entries", .0.display())]
    LexiconEmpty(PathBuf),

    #[error("cannot read pronunciation dictionary '{}': {source}", path.display())]
    LexiconUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pronunciation dictionary line {line}: {reason}")]
    LexiconMalformed { line: usize, reason: String },
}

pub type CguResult<T> = std::result::Result<T, CguError>;
