// ============================================================
// Layer 4 — Document Loader
// ============================================================
// Reads one markdown document from disk as-is. No markdown
// parsing happens here: headings, emphasis and links are left
// in place and the tokenizer simply drops their punctuation.
//
// The file handle is opened and closed inside read_to_string,
// so it is released on every exit path.

use std::{fs, path::Path};

use crate::domain::error::{CguError, CguResult};

/// Read the full UTF-8 text of a document.
pub fn read_document(path: &Path) -> CguResult<String> {
    let text = fs::read_to_string(path).map_err(|source| CguError::UnreadableDocument {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Loaded: {} ({} chars)", path.display(), text.len());
    Ok(text)
}
