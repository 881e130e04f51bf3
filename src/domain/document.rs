// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// One analysed CGU: its identity, its text, and every count
// and score computed from that text. A Document is built once
// and never changes afterwards; the only thing that leaves it
// is its DocumentSummary, which is what the report stores.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::error::CguResult;
use crate::domain::identity::Identity;
use crate::domain::readability::{Readability, TextCounts};

/// How many characters of content Display shows
const PREVIEW_CHARS: usize = 500;

/// The per-document record written to the report, keyed by fullname.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub document_type: String,
    pub num_words: usize,
    pub readability: f64,
    pub readability_grade_level: f64,
}

#[derive(Debug, Clone)]
pub struct Document {
    identity:       Identity,
    raw_content:    String,
    tokens:         Vec<String>,
    sentence_count: usize,
    syllable_count: usize,
    readability:    Readability,
}

impl Document {
    /// Assemble a document from already computed counts.
    ///
    /// Fails with `UndecidableMetric` when there are no tokens or
    /// no sentences, since neither score is defined then.
    pub fn new(
        identity:       Identity,
        raw_content:    String,
        tokens:         Vec<String>,
        sentence_count: usize,
        syllable_count: usize,
    ) -> CguResult<Self> {
        let readability = Readability::compute(TextCounts::new(
            tokens.len(),
            sentence_count,
            syllable_count,
        ))?;

        Ok(Self {
            identity,
            raw_content,
            tokens,
            sentence_count,
            syllable_count,
            readability,
        })
    }

    pub fn service(&self) -> &str {
        self.identity.service()
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    /// Same as the name: the kind of policy ("Privacy Policy", ...)
    pub fn document_type(&self) -> &str {
        self.identity.name()
    }

    pub fn fullname(&self) -> String {
        self.identity.fullname()
    }

    pub fn is_historical(&self) -> bool {
        self.identity.is_historical()
    }

    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Length of a document is its number of words
    pub fn num_words(&self) -> usize {
        self.tokens.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    /// Flesch Reading Ease
    pub fn readability(&self) -> f64 {
        self.readability.reading_ease
    }

    /// Flesch–Kincaid Grade Level
    pub fn readability_grade_level(&self) -> f64 {
        self.readability.grade_level
    }

    pub fn to_summary(&self) -> DocumentSummary {
        DocumentSummary {
            document_type:           self.document_type().to_string(),
            num_words:               self.num_words(),
            readability:             self.readability.reading_ease,
            readability_grade_level: self.readability.grade_level,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview: String = self.raw_content.chars().take(PREVIEW_CHARS).collect();
        write!(
            f,
            "\n{}\nIs Historical Data: {}\nLength: {}\n\n{} ...",
            self.fullname(),
            self.is_historical(),
            self.num_words(),
            preview
        )
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{CguError, ZeroQuantity};

    fn identity() -> Identity {
        Identity::Current {
            service: "FakeService".to_string(),
            name:    "Community Guidelines".to_string(),
        }
    }

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn test_summary_projects_fields() {
        let doc = Document::new(identity(), "text".into(), words(29), 4, 37).unwrap();
        let s = doc.to_summary();
        assert_eq!(s.document_type, "Community Guidelines");
        assert_eq!(s.num_words, 29);
        assert_eq!(s.readability, doc.readability());
        assert_eq!(s.readability_grade_level, doc.readability_grade_level());
    }

    #[test]
    fn test_summary_json_round_trip() {
        let doc = Document::new(identity(), "text".into(), words(29), 4, 37).unwrap();
        let json = serde_json::to_value(doc.to_summary()).unwrap();

        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["document_type", "num_words", "readability", "readability_grade_level"]
        );
        assert!(obj["num_words"].is_u64());

        let back: DocumentSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc.to_summary());
    }

    #[test]
    fn test_computed_scores_survive_json_text() {
        // Scores are arbitrary f64s such as 121.22000000000003; the
        // report is text, so every bit must come back from a string.
        for w in 1..=40 {
            for s in 1..=6 {
                for sy in w..=3 * w {
                    let doc = Document::new(identity(), "text".into(), words(w), s, sy).unwrap();
                    let summary = doc.to_summary();
                    let text = serde_json::to_string(&summary).unwrap();
                    let back: DocumentSummary = serde_json::from_str(&text).unwrap();
                    assert_eq!(
                        back.readability.to_bits(),
                        summary.readability.to_bits(),
                        "reading ease for ({w}, {s}, {sy}) from {text}"
                    );
                    assert_eq!(
                        back.readability_grade_level.to_bits(),
                        summary.readability_grade_level.to_bits(),
                        "grade level for ({w}, {s}, {sy}) from {text}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_words_is_undecidable() {
        let err = Document::new(identity(), "...".into(), Vec::new(), 1, 0).unwrap_err();
        assert!(matches!(err, CguError::UndecidableMetric(ZeroQuantity::Words)));
    }

    #[test]
    fn test_display_shows_header_and_preview() {
        let content = "x".repeat(600);
        let doc = Document::new(identity(), content, words(1), 1, 1).unwrap();
        let shown = doc.to_string();
        assert!(shown.starts_with("\nFakeService - Community Guidelines\nIs Historical Data: false\nLength: 1\n\n"));
        assert!(shown.ends_with(&format!("{} ...", "x".repeat(500))));
    }
}
