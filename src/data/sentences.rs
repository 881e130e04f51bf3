// ============================================================
// Layer 4 — Sentence Splitter
// ============================================================
// Sentence boundary detection with the Punkt algorithm
// (Kiss & Strunk, 2006) and its pre-trained English parameters.
//
// Punkt decides whether a '.' ends a sentence from statistics
// learned on a large corpus: known abbreviations ("e.g.", "Inc."),
// initials, and orthographic evidence about the word that
// follows. '!' and '?' always end a sentence.
//
// Line breaks alone never end a sentence, so a markdown
// heading without punctuation joins the sentence after it.
//
// Reference: https://aclanthology.org/J06-4003/

use punkt::params::Standard;
use punkt::{SentenceTokenizer, TrainingData};

use crate::domain::traits::SentenceSegmenter;

/// English Punkt segmenter. Loading the parameters is not free,
/// so build one per run and share it across documents.
pub struct SentenceSplitter {
    params: TrainingData,
}

impl SentenceSplitter {
    pub fn new() -> Self {
        Self {
            params: TrainingData::english(),
        }
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter for SentenceSplitter {
    fn sentences<'a>(&'a self, text: &'a str) -> Vec<&'a str> {
        SentenceTokenizer::<Standard>::new(text, &self.params)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
