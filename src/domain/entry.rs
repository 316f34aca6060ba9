// ============================================================
// Layer 3 — Corpus File Entry
// ============================================================
// Represents a single MIDI file discovered under the corpus
// root. Plain data with no behaviour beyond name derivation.

use std::path::PathBuf;

/// One discovered input file.
///
/// Created by the corpus scanner after the "exists and is a regular
/// file" check has passed. Existence is not re-checked afterwards;
/// the pipeline only ever reads the underlying file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    /// Full path to the file as discovered
    pub path: PathBuf,

    /// The file name component with its extension kept ("piece.mid").
    /// Output artifact names are derived from this.
    pub file_name: String,
}

impl FileEntry {
    /// Create a new FileEntry from a path.
    /// The file name is derived once here so later stages never
    /// have to re-split the path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Self { path, file_name }
    }
}
