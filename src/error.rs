use std::path::PathBuf;

use thiserror::Error;

use crate::morphology::NodeId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur during SWC parsing, morphology
/// construction, and topological/geometric analysis. Each variant provides specific context
/// about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Parsing Errors
/// - [`Error::MalformedLine`] - An SWC record with the wrong token count or an unparsable field
/// - [`Error::InvalidNodeType`] - A type field outside the SWC-defined 0-7 range
///
/// ## Graph Construction Errors
/// - [`Error::InvalidNode`] - Negative node identifier
/// - [`Error::DuplicateNode`] - Node identifier inserted twice
/// - [`Error::UnknownNode`] - Edge or query referring to an absent node
/// - [`Error::DuplicateParent`] - Second parent edge for the same child
/// - [`Error::Cycle`] - Edge insertion that would break the tree invariant
///
/// ## Analysis Errors
/// - [`Error::DegenerateGeometry`] - Zero-length vector in an angle computation
/// - [`Error::Disconnected`] - No path between two nodes (forest input)
/// - [`Error::EmptyGraph`] - Nearest-node query against an empty morphology
///
/// ## I/O Errors
/// - [`Error::InvalidFile`] - File could not be read or parsed, with the offending path
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// # Examples
///
/// ```rust,no_run
/// use morphoscope::{format, Error};
///
/// match format::load("neuron.swc") {
///     Ok(morphology) => println!("{} samples", morphology.len()),
///     Err(Error::InvalidFile { path, .. }) => eprintln!("invalid file: {}", path.display()),
///     Err(Error::MalformedLine { number, line }) => eprintln!("bad record {}: {}", number, line),
///     Err(e) => eprintln!("error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// An SWC record could not be tokenized into the seven required fields, or one of its
    /// numeric fields failed to parse.
    ///
    /// Carries the raw line content and its 1-based position in the input. Blank lines and
    /// `#` comments are never reported; everything else is, parsing is strict by default.
    #[error("Malformed SWC record at line {number}: {line:?}")]
    MalformedLine {
        /// Raw content of the offending line, whitespace-trimmed
        line: String,
        /// 1-based line number within the parsed text
        number: usize,
    },

    /// A type field was outside the SWC-defined range of 0-7.
    ///
    /// The morphology graph itself stores whatever type it is given; this error is raised
    /// by the strict parser before the node is constructed.
    #[error("Node type {0} is outside the SWC range 0-7")]
    InvalidNodeType(i64),

    /// A node identifier was negative.
    ///
    /// SWC uses `-1` as the "no parent" sentinel, so negative values can never name a
    /// sample. Zero is accepted: the format does not forbid it and published
    /// reconstructions use it.
    #[error("Invalid node id {0}, sample ids must be non-negative")]
    InvalidNode(NodeId),

    /// A node with this identifier is already present in the morphology.
    ///
    /// Duplicate insertion is rejected rather than silently overwritten so that malformed
    /// input is caught as early as possible.
    #[error("Node {0} is already present")]
    DuplicateNode(NodeId),

    /// An edge or query referred to a node identifier that is not part of the morphology.
    ///
    /// During parsing this surfaces after the full pass when a parent reference was never
    /// declared by any record.
    #[error("Unknown node id {0}")]
    UnknownNode(NodeId),

    /// A parent edge was inserted for a child that already has one.
    ///
    /// In an SWC tree every sample has at most one parent; a second parent edge means the
    /// input is not a tree.
    #[error("Node {0} already has a parent")]
    DuplicateParent(NodeId),

    /// Inserting this edge would create a cycle.
    ///
    /// SWC inputs are acyclic by construction, but a corrupt file could name a descendant
    /// as a parent. The check walks the parent chain before committing the edge.
    #[error("Edge would create a cycle through node {0}")]
    Cycle(NodeId),

    /// An angle computation encountered a zero-length vector.
    ///
    /// Occurs when two of the three samples in a branch-angle query share the same
    /// position, leaving the angle undefined.
    #[error("Zero-length vector, angle is undefined")]
    DegenerateGeometry,

    /// No path exists between two nodes.
    ///
    /// Only possible when the structure is a forest, for example a partially assembled
    /// morphology with more than one root.
    #[error("No path between nodes {from} and {to}")]
    Disconnected {
        /// Start of the requested path
        from: NodeId,
        /// End of the requested path
        to: NodeId,
    },

    /// A nearest-node query was made against an empty morphology.
    #[error("Morphology contains no nodes")]
    EmptyGraph,

    /// A file could not be read or its content could not be parsed as SWC.
    ///
    /// Wraps the underlying failure and always names the offending path.
    #[error("Invalid file {}: {source}", path.display())]
    InvalidFile {
        /// Path of the file that failed to load or save
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during file operations such as reading
    /// from disk, permission issues, or filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = Error::MalformedLine {
            line: "1 2 three".to_string(),
            number: 4,
        };
        assert!(err.to_string().contains("line 4"));
        assert!(err.to_string().contains("1 2 three"));

        let err = Error::UnknownNode(17);
        assert!(err.to_string().contains("17"));

        let err = Error::Disconnected { from: 1, to: 9 };
        assert!(err.to_string().contains('1'));
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_invalid_file_chains_source() {
        let inner = Error::MalformedLine {
            line: "x".to_string(),
            number: 1,
        };
        let err = Error::InvalidFile {
            path: PathBuf::from("/tmp/bad.swc"),
            source: Box::new(inner),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("/tmp/bad.swc"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
