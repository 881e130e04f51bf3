// ============================================================
// Layer 4 — Corpus Locator
// ============================================================
// Finds every markdown document under a corpus root.
//
// Corpus layout (depth counted from the root, which is 0):
//
//   <root>/README.md                         depth 1  ← skipped by default
//   <root>/FakeService/Terms of Service.md   depth 2
//   <root>/Instagram/Terms/2020-01-15.md     depth 3
//
// Files sitting directly under the root are repository
// housekeeping (README, LICENSE, ...) rather than documents,
// so they are excluded unless the caller asks for them.
//
// The root is validated when the locator is built; the walk
// itself is lazy and can be restarted by calling
// documents() again.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::error::{CguError, CguResult};

/// File extension of corpus documents
pub const DOCUMENT_EXTENSION: &str = "md";

#[derive(Debug, Clone)]
pub struct CorpusLocator {
    root: PathBuf,
}

impl CorpusLocator {
    /// Point a locator at `root`, failing if it is missing or
    /// not a directory.
    pub fn new(root: impl Into<PathBuf>) -> CguResult<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(CguError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(CguError::RootNotADirectory(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the corpus and yield every `.md` file.
    ///
    /// With `ignore_top_level` set, only files at depth ≥ 2 are
    /// yielded. Order follows the filesystem and is not stable
    /// across machines.
    pub fn documents(&self, ignore_top_level: bool) -> impl Iterator<Item = PathBuf> + '_ {
        let min_depth = if ignore_top_level { 2 } else { 1 };

        WalkDir::new(&self.root)
            .min_depth(min_depth)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable corpus entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry.path().extension().and_then(|e| e.to_str()) == Some(DOCUMENT_EXTENSION)
            })
            .map(|entry| entry.into_path())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::TempDir;

    /// Seven markdown files, one of them at the top level,
    /// plus a couple of files that must never be picked up.
    fn sample_corpus() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let files = [
            "README.md",
            "FakeService/Community Guidelines.md",
            "FakeService/Terms of Service.md",
            "Instagram/Community Guidelines.md",
            "Instagram/Privacy Policy.md",
            "Instagram/Community Guidelines/2020-01-15.md",
            "Instagram/Community Guidelines/2021-06-01.md",
            "Instagram/notes.txt",
            "LICENSE",
        ];
        for f in files {
            let path = root.join(f);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "Some text.").unwrap();
        }
        dir
    }

    fn collect(locator: &CorpusLocator, ignore_top_level: bool) -> BTreeSet<PathBuf> {
        locator.documents(ignore_top_level).collect()
    }

    #[test]
    fn test_root_ok() {
        let dir = sample_corpus();
        let locator = CorpusLocator::new(dir.path()).unwrap();
        assert_eq!(locator.root(), dir.path());
    }

    #[test]
    fn test_root_does_not_exist() {
        let dir = TempDir::new().unwrap();
        let err = CorpusLocator::new(dir.path().join("wrong_dir")).unwrap_err();
        assert!(matches!(err, CguError::RootNotFound(_)));
        assert!(err.to_string().ends_with("does not exist"));
    }

    #[test]
    fn test_root_is_not_a_directory() {
        let dir = sample_corpus();
        let file = dir.path().join("FakeService/Community Guidelines.md");
        let err = CorpusLocator::new(file).unwrap_err();
        assert!(matches!(err, CguError::RootNotADirectory(_)));
        assert!(err.to_string().ends_with("is not a directory"));
    }

    #[test]
    fn test_list_files() {
        let dir = sample_corpus();
        let locator = CorpusLocator::new(dir.path()).unwrap();
        assert_eq!(locator.documents(true).count(), 6);
        assert_eq!(locator.documents(false).count(), 7);
    }

    #[test]
    fn test_ignoring_top_level_drops_exactly_depth_one() {
        let dir = sample_corpus();
        let locator = CorpusLocator::new(dir.path()).unwrap();
        let nested = collect(&locator, true);
        let all = collect(&locator, false);

        assert!(nested.is_subset(&all));
        let dropped: Vec<_> = all.difference(&nested).cloned().collect();
        assert_eq!(dropped, vec![dir.path().join("README.md")]);
    }

    #[test]
    fn test_enumeration_is_restartable() {
        let dir = sample_corpus();
        let locator = CorpusLocator::new(dir.path()).unwrap();
        assert_eq!(collect(&locator, true), collect(&locator, true));
    }

    #[test]
    fn test_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let locator = CorpusLocator::new(dir.path()).unwrap();
        assert_eq!(locator.documents(false).count(), 0);
    }
}
