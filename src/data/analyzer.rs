// ============================================================
// Layer 4 — Document Analyzer
// ============================================================
// Turns one corpus file into a Document:
//
//   path ──► Identity          (from path only, fails before reading)
//        ──► raw text          (loader)
//        ──► tokens            (WordTokenizer)
//        ──► sentence count    (SentenceSegmenter)
//        ──► syllable count    (SyllableCounter)
//        ──► Document          (scores computed, immutable)
//
// The analyzer borrows its reference data (pronunciation
// dictionary, Punkt parameters) so one load serves a whole run.

use std::path::Path;

use crate::data::loader::read_document;
use crate::data::tokenizer::WordTokenizer;
use crate::domain::document::Document;
use crate::domain::error::CguResult;
use crate::domain::identity::{Identity, Layout};
use crate::domain::traits::{SentenceSegmenter, SyllableCounter};

pub struct DocumentAnalyzer<'a> {
    tokenizer: WordTokenizer,
    sentences: &'a dyn SentenceSegmenter,
    syllables: &'a dyn SyllableCounter,
}

impl<'a> DocumentAnalyzer<'a> {
    pub fn new(sentences: &'a dyn SentenceSegmenter, syllables: &'a dyn SyllableCounter) -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            sentences,
            syllables,
        }
    }

    /// Analyse the document at `path`, named according to `layout`.
    pub fn analyze_file(&self, path: &Path, layout: Layout) -> CguResult<Document> {
        let identity = Identity::from_path(path, layout)?;
        let raw_content = read_document(path)?;
        self.analyze_text(identity, raw_content)
    }

    /// Analyse text whose identity is already known
    pub fn analyze_text(&self, identity: Identity, raw_content: String) -> CguResult<Document> {
        let tokens = self.tokenizer.tokenize(&raw_content);
        let sentence_count = self.sentences.count(&raw_content);
        let syllable_count = self.syllables.total_syllables(&tokens);

        Document::new(identity, raw_content, tokens, sentence_count, syllable_count)
    }
}
