// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// the application layer can swap implementations without
// changing the code that uses them:
//   - MidiScanner implements CorpusSource
//   - MidiFileEncoder implements PieceEncoder
//   - Tests substitute stub encoders to exercise the pipeline
//     without parsing a single real MIDI file

use anyhow::Result;

use crate::domain::entry::FileEntry;
use crate::domain::record::EncodedPiece;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can discover the corpus of input files.
///
/// Implementations:
///   - MidiScanner → non-recursive .mid listing under a root directory
pub trait CorpusSource {
    /// Discover all candidate input files.
    ///
    /// Every returned entry has already passed the "exists and is a
    /// regular file" check; a discovered path failing that check is a
    /// fatal error, not a skipped file.
    fn scan(&self) -> Result<Vec<FileEntry>>;
}

// ─── PieceEncoder ─────────────────────────────────────────────────────────────
/// Any component that can turn one input file into its encoded
/// event-token representation.
///
/// Implementations:
///   - MidiFileEncoder → performance-event encoding via midly
///   - (tests) stub encoders with scripted successes and failures
pub trait PieceEncoder {
    /// Encode a single file. An error here aborts the whole run;
    /// the pipeline never catches or retries encoder failures.
    fn encode(&self, entry: &FileEntry) -> Result<EncodedPiece>;
}
