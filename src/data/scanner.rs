// ============================================================
// Layer 4 — Corpus Scanner
// ============================================================
// Discovers candidate .mid files directly under the corpus root
// (non-recursive) and validates the preconditions: the root must
// be a readable directory, and every discovered path must be an
// existing regular file. Either failing aborts the run before any
// split or encode work begins.
//
// Output ordering is whatever the directory iteration yields.
// It is deliberately unspecified: the split assigner shuffles the
// list with a seeded RNG anyway, so only "same listing order +
// same seed" reproduces a run.

use anyhow::{bail, Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::entry::FileEntry;
use crate::domain::traits::CorpusSource;

/// File extension the scanner accepts, without the dot
const MIDI_EXTENSION: &str = "mid";

/// Scans a corpus root for .mid files.
/// Implements the CorpusSource trait from the domain layer.
pub struct MidiScanner {
    /// Path to the directory containing the corpus
    root: PathBuf,
}

impl MidiScanner {
    /// Create a new MidiScanner pointed at a corpus root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CorpusSource for MidiScanner {
    fn scan(&self) -> Result<Vec<FileEntry>> {
        // A missing corpus root is a precondition violation, not an
        // empty corpus: fail before any processing starts.
        if !self.root.is_dir() {
            bail!(
                "Corpus root '{}' is not an existing directory",
                self.root.display()
            );
        }

        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&self.root)
            .with_context(|| format!("Cannot read corpus root '{}'", self.root.display()))?
        {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();

            // Only .mid files take part; everything else is ignored
            if path.extension().and_then(|e| e.to_str()) != Some(MIDI_EXTENSION) {
                continue;
            }

            // Every discovered .mid must be an existing regular file.
            // A directory named "something.mid" violates the scan
            // precondition and aborts the run.
            if !path.is_file() {
                bail!(
                    "Discovered corpus entry '{}' is not a regular file",
                    path.display()
                );
            }

            entries.push(FileEntry::new(path));
        }

        tracing::info!(
            "Found {} pieces under '{}'",
            entries.len(),
            self.root.display()
        );
        Ok(entries)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_only_mid_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.mid"), b"MThd").unwrap();
        fs::write(dir.path().join("b.mid"), b"MThd").unwrap();
        fs::write(dir.path().join("notes.txt"), b"not midi").unwrap();
        fs::write(dir.path().join("c.midi"), b"wrong extension").unwrap();

        let scanner = MidiScanner::new(dir.path());
        let mut names: Vec<String> = scanner
            .scan()
            .unwrap()
            .into_iter()
            .map(|e| e.file_name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.mid", "b.mid"]);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let scanner = MidiScanner::new(dir.path().join("does-not-exist"));
        assert!(scanner.scan().is_err());
    }

    #[test]
    fn test_non_recursive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("top.mid"), b"MThd").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.mid"), b"MThd").unwrap();

        let scanner = MidiScanner::new(dir.path());
        let entries = scanner.scan().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, "top.mid");
    }

    #[test]
    fn test_directory_with_mid_extension_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("folder.mid")).unwrap();

        let scanner = MidiScanner::new(dir.path());
        assert!(scanner.scan().is_err());
    }

    #[test]
    fn test_empty_root_yields_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let scanner = MidiScanner::new(dir.path());
        assert!(scanner.scan().unwrap().is_empty());
    }
}
