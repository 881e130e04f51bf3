// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The metrics engine only talks to reference data through
// these traits. Real implementations live in Layer 4 (data)
// and Layer 6 (infra); tests plug in tiny hand-made ones.
//
// Implementations:
//   - CmuDict          → SyllableCounter backed by the CMU lexicon
//   - SentenceSplitter → Punkt SentenceSegmenter for English
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

// ─── SyllableCounter ──────────────────────────────────────────────────────────
/// Estimates how many syllables a single lower-cased token has.
pub trait SyllableCounter {
    /// Syllable estimate for `word`. Never fails: unknown words
    /// still get an estimate.
    fn syllables(&self, word: &str) -> usize;

    /// Sum of estimates over a token stream
    fn total_syllables(&self, tokens: &[String]) -> usize {
        tokens.iter().map(|t| self.syllables(t)).sum()
    }
}

// ─── SentenceSegmenter ────────────────────────────────────────────────────────
/// Splits raw text into sentences.
pub trait SentenceSegmenter {
    /// Sentences found in `text`, trimmed, never empty strings
    fn sentences<'a>(&'a self, text: &'a str) -> Vec<&'a str>;

    fn count(&self, text: &str) -> usize {
        self.sentences(text).len()
    }
}
