// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of the pipeline.
//
// Rules for this layer:
//   - NO midly or other format-specific types allowed here
//   - NO file I/O
//   - Only plain data and the trait seams other layers implement
//
// Think of this layer as the "dictionary" of the system:
// it defines what things ARE, not how they work.

// A MIDI file discovered under the corpus root
pub mod entry;

// The encoded event stream produced for one piece
pub mod record;

// Split identity, ratios, assignment, and run counters
pub mod split;

// Core abstractions (traits) that other layers implement
pub mod traits;
