// ============================================================
// Layer 5 — Performance-Event Vocabulary
// ============================================================
// The token vocabulary for encoded pieces. Four contiguous
// ranges make up 388 tokens:
//
//   [  0, 128)  note-on,    pitch 0..=127
//   [128, 256)  note-off,   pitch 0..=127
//   [256, 356)  time-shift, 1..=100 steps of 10 ms (1 s max)
//   [356, 388)  velocity,   32 bins of width 4
//
// A gap longer than one second is expressed as several
// consecutive time-shift tokens. A velocity token is only
// emitted when the velocity bin changes between note-ons.

/// First note-on token
pub const NOTE_ON_OFFSET: u32 = 0;
/// First note-off token
pub const NOTE_OFF_OFFSET: u32 = 128;
/// First time-shift token
pub const TIME_SHIFT_OFFSET: u32 = 256;
/// First velocity token
pub const VELOCITY_OFFSET: u32 = 356;

/// Number of distinct pitches
pub const PITCH_RANGE: u32 = 128;
/// Number of time-shift steps expressible in one token
pub const TIME_SHIFT_STEPS: u32 = 100;
/// Number of velocity bins
pub const VELOCITY_BINS: u32 = 32;
/// Total vocabulary size
pub const VOCAB_SIZE: u32 = VELOCITY_OFFSET + VELOCITY_BINS;

/// Milliseconds covered by one time-shift step
pub const TIME_STEP_MS: u64 = 10;
/// MIDI velocities covered by one velocity bin
pub const VELOCITY_BIN_WIDTH: u8 = 4;

/// One decoded vocabulary event.
///
/// `token()` and `from_token()` convert between this enum and the
/// flat u32 representation stored in artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key pressed; pitch 0..=127
    NoteOn { pitch: u8 },
    /// Key released; pitch 0..=127
    NoteOff { pitch: u8 },
    /// Time advances by `steps` * 10 ms; steps 1..=100
    TimeShift { steps: u32 },
    /// Velocity of subsequent note-ons changes to this bin; 0..=31
    Velocity { bin: u8 },
}

impl Event {
    /// The flat token for this event
    pub fn token(self) -> u32 {
        match self {
            Event::NoteOn { pitch } => NOTE_ON_OFFSET + pitch as u32,
            Event::NoteOff { pitch } => NOTE_OFF_OFFSET + pitch as u32,
            // steps is 1-based: a shift of one step is the first token
            Event::TimeShift { steps } => TIME_SHIFT_OFFSET + steps - 1,
            Event::Velocity { bin } => VELOCITY_OFFSET + bin as u32,
        }
    }

    /// Decode a flat token back into an event.
    /// Returns None for tokens outside the vocabulary.
    pub fn from_token(token: u32) -> Option<Event> {
        match token {
            t if t < NOTE_OFF_OFFSET => Some(Event::NoteOn { pitch: t as u8 }),
            t if t < TIME_SHIFT_OFFSET => Some(Event::NoteOff {
                pitch: (t - NOTE_OFF_OFFSET) as u8,
            }),
            t if t < VELOCITY_OFFSET => Some(Event::TimeShift {
                steps: t - TIME_SHIFT_OFFSET + 1,
            }),
            t if t < VOCAB_SIZE => Some(Event::Velocity {
                bin: (t - VELOCITY_OFFSET) as u8,
            }),
            _ => None,
        }
    }

    /// Map a raw MIDI velocity (0..=127) to its bin (0..=31)
    pub fn velocity_bin(velocity: u8) -> u8 {
        velocity / VELOCITY_BIN_WIDTH
    }
}
