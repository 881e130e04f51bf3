// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// A word is a maximal run of ASCII letters and digits.
// Everything else (punctuation, whitespace, markdown syntax,
// accented letters) separates words and is dropped.
//
// Example:
//   "Don't post spam (e.g. ads)!"
//     → ["don", "t", "post", "spam", "e", "g", "ads"]
//
// Tokens are lower-cased so they match pronunciation
// dictionary keys.

use regex::Regex;

const TOKEN_PATTERN: &str = r"[a-zA-Z0-9]+";

#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"),
        }
    }

    /// Lower-cased alphanumeric tokens in order of appearance
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_ascii_lowercase())
            .collect()
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
