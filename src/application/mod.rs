// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish a
// specific goal (preparing a dataset or inspecting an artifact).
//
// Rules for this layer:
//   - No MIDI parsing or encoding math here
//   - No printing here (that's Layer 1)
//   - No direct disk layout knowledge (that's Layer 6)
//   - Only workflow coordination

// The corpus preparation pipeline
pub mod prepare_use_case;

// Token statistics for a single written artifact
pub mod inspect_use_case;
