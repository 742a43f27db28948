//! # morphoscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! functions from the morphoscope library. Import this module to get quick access
//! to the essentials for SWC parsing and morphology analysis.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all morphoscope operations
pub use crate::Error;

/// The result type used throughout morphoscope
pub use crate::Result;

// ================================================================================================
// Morphology Graph
// ================================================================================================

/// The morphology graph and its sample primitives
pub use crate::morphology::{NeuronMorphology, Node, NodeId, NodeType, Point3};

/// Scaling factor selection and rotation rounding precision
pub use crate::morphology::{Scale, ROTATION_PRECISION};

// ================================================================================================
// SWC Codec
// ================================================================================================

/// Text parsing and serialization
pub use crate::format::{parse_swc, write_swc};

/// File persistence
pub use crate::format::{load, save};
