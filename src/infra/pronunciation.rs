// ============================================================
// Layer 6 — Pronunciation Dictionary
// ============================================================
// Loads the Carnegie Mellon University Pronouncing Dictionary
// and uses it to count syllables.
//
// Each entry maps a word to one or more transcriptions made of
// ARPAbet phonemes. Vowels carry a stress digit:
//
//   ABANDON  AH0 B AE1 N D AH0 N      → 3 vowels → 3 syllables
//
// Three file layouts are understood, all line based:
//
//   cmudict-0.7b      ABANDON  AH0 B AE1 N D AH0 N   (";;;" comments)
//   cmudict.dict      abandon AH0 B AE1 N D AH0 N    ("#" comments)
//   NLTK corpus       abandon 1 AH0 B AE1 N D AH0 N
//
// Alternative pronunciations are written WORD(2), WORD(3), ...
// and are grouped under the bare word.
//
// Syllable policy:
//   - word missing from the dictionary       → 1
//   - several transcriptions                 → the largest vowel count

use std::{collections::HashMap, fs, path::Path};

use crate::domain::error::{CguError, CguResult};
use crate::domain::traits::SyllableCounter;

/// One phonetic transcription, e.g. ["K", "AE1", "T"]
pub type Transcription = Vec<String>;

#[derive(Debug, Clone, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<Transcription>>,
}

impl CmuDict {
    /// A dictionary with no entries: every word counts as one syllable
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a dictionary file from disk
    pub fn load(path: &Path) -> CguResult<Self> {
        let bytes = fs::read(path).map_err(|source| CguError::LexiconUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        // cmudict-0.7b carries a handful of Latin-1 bytes in comments
        let text = String::from_utf8_lossy(&bytes);
        let dict = Self::parse(&text)?;
        if dict.is_empty() {
            return Err(CguError::LexiconEmpty(path.to_path_buf()));
        }

        tracing::info!(
            "Loaded pronunciation dictionary '{}' ({} words)",
            path.display(),
            dict.len()
        );
        Ok(dict)
    }

    /// Parse dictionary text in any of the supported layouts
    pub fn parse(text: &str) -> CguResult<Self> {
        let mut dict = Self::empty();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }

            let mut fields = line.split_whitespace();
            let Some(head) = fields.next() else { continue };
            let word = strip_variant(head);

            let mut phonemes: Vec<String> = fields.map(str::to_string).collect();
            // NLTK layout puts a numeric column between word and phonemes
            if phonemes.first().is_some_and(|p| p.parse::<u32>().is_ok()) {
                phonemes.remove(0);
            }
            if phonemes.is_empty() {
                return Err(CguError::LexiconMalformed {
                    line:   idx + 1,
                    reason: format!("no phonemes for '{word}'"),
                });
            }

            dict.insert(word, phonemes);
        }

        Ok(dict)
    }

    /// Add one transcription for `word` (stored lower-cased)
    pub fn insert(&mut self, word: &str, transcription: Transcription) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(transcription);
    }

    pub fn pronunciations(&self, word: &str) -> Option<&[Transcription]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SyllableCounter for CmuDict {
    fn syllables(&self, word: &str) -> usize {
        match self.pronunciations(word) {
            None => 1,
            Some(prons) => prons
                .iter()
                .map(|p| vowel_count(p))
                .max()
                .unwrap_or(1),
        }
    }
}

/// Vowel phonemes end with a stress digit (0, 1 or 2)
pub fn vowel_count(transcription: &[String]) -> usize {
    transcription
        .iter()
        .filter(|p| p.chars().last().is_some_and(|c| c.is_ascii_digit()))
        .count()
}

/// "WORD(2)" → "WORD"
fn strip_variant(head: &str) -> &str {
    match head.find('(') {
        Some(pos) if pos > 0 && head.ends_with(')') => &head[..pos],
        _ => head,
    }
}
