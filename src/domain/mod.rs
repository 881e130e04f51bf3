// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types describing what a CGU is and what we
// measure about it. No file I/O and no parsing of reference
// data happens here: the loaders and the analyzer live in
// Layer 4 (data) and Layer 6 (infra).
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// An analysed document and its report summary
pub mod document;

// Errors every layer below the CLI can raise
pub mod error;

// Path-derived identity (service, name, version date)
pub mod identity;

// Flesch reading ease and grade level
pub mod readability;

// Seams for syllable counting and sentence segmentation
pub mod traits;
