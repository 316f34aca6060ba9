// ============================================================
// Layer 6 — Artifact Writer
// ============================================================
// Persists encoded pieces under the output root:
//
//   output_root/
//     train/  piece_a.mid.json
//     val/    piece_b.mid.json
//     test/   piece_c.mid.json
//
// Artifact naming keeps the full source file name and appends
// the serialization suffix: "piece.mid" → "piece.mid.json".
// Given unique input names the artifact name is unique within
// its split directory; two inputs sharing a name would silently
// overwrite each other (last write wins).

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::entry::FileEntry;
use crate::domain::record::EncodedPiece;
use crate::domain::split::Split;

/// Suffix appended to the source file name, dot included
const ARTIFACT_SUFFIX: &str = ".json";

/// Writes encoded pieces into the three split directories.
pub struct ArtifactWriter {
    /// Root under which train/, val/ and test/ live
    output_root: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer for the given output root.
    /// Does not touch the filesystem; call `create_split_dirs`
    /// before the first write.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Full path of the directory for one split
    pub fn split_dir(&self, split: Split) -> PathBuf {
        self.output_root.join(split.dir_name())
    }

    /// Create the three split directories, parents included.
    /// Idempotent: pre-existing directories are not an error.
    pub fn create_split_dirs(&self) -> Result<()> {
        for split in Split::ALL {
            let dir = self.split_dir(split);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create split directory '{}'", dir.display()))?;
        }
        Ok(())
    }

    /// Derive the artifact file name for a source entry.
    /// Deterministic: the same input name maps to the same artifact
    /// name no matter which split it lands in.
    pub fn artifact_name(entry: &FileEntry) -> String {
        format!("{}{}", entry.file_name, ARTIFACT_SUFFIX)
    }

    /// Serialize one encoded piece into its split directory and
    /// return the written path.
    ///
    /// The split directory must already exist (`create_split_dirs`);
    /// a missing or unwritable directory fails the run. An existing
    /// artifact of the same name is overwritten.
    pub fn write(&self, piece: &EncodedPiece, split: Split, entry: &FileEntry) -> Result<PathBuf> {
        let path = self.split_dir(split).join(Self::artifact_name(entry));

        let json = serde_json::to_vec(piece)
            .with_context(|| format!("Cannot serialize encoded piece '{}'", piece.source))?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write artifact '{}'", path.display()))?;

        tracing::debug!("Wrote artifact '{}'", path.display());
        Ok(path)
    }

    /// Read one artifact back from disk.
    /// Used by the inspect command and by tests.
    pub fn read_artifact(path: &Path) -> Result<EncodedPiece> {
        let json = fs::read(path)
            .with_context(|| format!("Cannot read artifact '{}'", path.display()))?;
        serde_json::from_slice(&json)
            .with_context(|| format!("Artifact '{}' is not a valid encoded piece", path.display()))
    }
}
