//! SWC text serialization.
//!
//! [`write_swc`] emits one record per sample in the morphology's insertion order,
//! fields separated by single spaces, `-1` for a missing parent, and a trailing
//! newline after the last record. Comments are never emitted.
//!
//! Coordinates and radii use Rust's shortest-round-trip `f64` formatting, so
//! `parse_swc(&write_swc(&g))` reproduces `g` exactly for any morphology `g` that
//! itself came out of the parser.
//!
//! # Usage Examples
//!
//! ```rust
//! use morphoscope::format::{parse_swc, write_swc};
//!
//! let morphology = parse_swc("1 1 0.5 0 0 4 -1\n2 2 1.5 0 0 1 1\n")?;
//! assert_eq!(write_swc(&morphology), "1 1 0.5 0 0 4 -1\n2 2 1.5 0 0 1 1\n");
//! # Ok::<(), morphoscope::Error>(())
//! ```

use std::fmt::Write;

use crate::morphology::NeuronMorphology;

/// Serializes a morphology to SWC text.
#[must_use]
pub fn write_swc(morphology: &NeuronMorphology) -> String {
    let mut text = String::new();
    for node in morphology.nodes() {
        let parent = morphology.parent_of(node.id).unwrap_or(-1);
        let _ = writeln!(
            text,
            "{} {} {} {} {} {} {}",
            node.id,
            node.node_type.value(),
            node.position.x,
            node.position.y,
            node.position.z,
            node.radius,
            parent
        );
    }
    text
}
