// ============================================================
// Layer 3 — Readability Scores
// ============================================================
// Flesch Reading Ease and Flesch–Kincaid Grade Level.
//
//   words/sentence  = W / S
//   syllables/word  = Sy / W
//
//   reading ease = 206.835 − 1.015·(W/S) − 84.6·(Sy/W)
//   grade level  = 0.39·(W/S) + 11.8·(Sy/W) − 15.59
//
// Both divide by W or S, so a document with no words or no
// sentences has no score: compute() returns UndecidableMetric
// instead of producing inf/NaN.
//
// Reference: https://en.wikipedia.org/wiki/Flesch%E2%80%93Kincaid_readability_tests

use serde::{Deserialize, Serialize};

use crate::domain::error::{CguError, CguResult, ZeroQuantity};

/// Raw counts a readability score is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCounts {
    pub words:     usize,
    pub sentences: usize,
    pub syllables: usize,
}

impl TextCounts {
    pub fn new(words: usize, sentences: usize, syllables: usize) -> Self {
        Self { words, sentences, syllables }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readability {
    /// Flesch Reading Ease: higher is easier, 60-70 is plain English
    pub reading_ease: f64,
    /// Flesch–Kincaid Grade Level, as a US school grade
    pub grade_level: f64,
}

impl Readability {
    /// Score a text from its counts.
    pub fn compute(counts: TextCounts) -> CguResult<Self> {
        if counts.words == 0 {
            return Err(CguError::UndecidableMetric(ZeroQuantity::Words));
        }
        if counts.sentences == 0 {
            return Err(CguError::UndecidableMetric(ZeroQuantity::Sentences));
        }

        let words_per_sentence = counts.words as f64 / counts.sentences as f64;
        let syllables_per_word = counts.syllables as f64 / counts.words as f64;

        Ok(Self {
            reading_ease: 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
            grade_level:  0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
        })
    }
}
