//! Deterministic JSON serialization for settings files and CLI output.
//!
//! Output is pretty-printed with 2-space indentation and ends with a newline,
//! so hand-edited settings files stay diff-friendly.

mod json;

pub use json::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
