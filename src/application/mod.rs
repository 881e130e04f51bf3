// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Wires the data and infra layers into a complete run.
//
// Rules for this layer:
//   - No metric formulas here (that's Layer 3)
//   - No argument parsing or printing (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The corpus statistics workflow (current and historical)
pub mod stats_use_case;
