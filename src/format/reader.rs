//! Strict SWC text parser.
//!
//! SWC is a line-oriented tabular format: one sample per line, seven
//! whitespace-separated fields (`id type x y z radius parent`), with blank lines
//! and `#` comments ignored. [`parse_swc`] converts such text into a
//! [`NeuronMorphology`], validating every retained line.
//!
//! # Parsing Contract
//!
//! - Parsing is all-or-nothing: any malformed record fails the whole parse and no
//!   partial morphology is observable.
//! - Only a negative parent field (conventionally `-1`) means "no parent". Any
//!   parent value >= 0, including 0, is a real reference: node ids start at a
//!   positive value by convention only, and published reconstructions do use id 0.
//! - Parent references may point forward in the file. Edges are attached after the
//!   node pass; a parent id no record ever declares surfaces as
//!   [`crate::Error::UnknownNode`].
//!
//! # Usage Examples
//!
//! ```rust
//! use morphoscope::format::parse_swc;
//!
//! let morphology = parse_swc(
//!     "# a soma with two dendrite stubs\n\
//!      1 1 0.0 0.0 0.0 4.0 -1\n\
//!      2 3 5.0 0.0 0.0 1.0 1\n\
//!      3 3 0.0 5.0 0.0 1.0 1\n",
//! )?;
//! assert_eq!(morphology.len(), 3);
//! assert_eq!(morphology.branch_points(), vec![1]);
//! # Ok::<(), morphoscope::Error>(())
//! ```

use std::str::FromStr;

use crate::{
    morphology::{NeuronMorphology, Node, NodeId, NodeType, Point3},
    Error, Result,
};

/// One tokenized SWC record before graph insertion.
struct Record {
    node: Node,
    parent: NodeId,
}

/// Tokenizes and validates a single retained SWC line.
fn parse_record(line: &str, number: usize) -> Result<Record> {
    let malformed = || Error::MalformedLine {
        line: line.to_string(),
        number,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 7 {
        return Err(malformed());
    }

    let int = |field: &str| field.parse::<i64>().map_err(|_| malformed());
    let float = |field: &str| field.parse::<f64>().map_err(|_| malformed());

    let id = int(fields[0])?;
    let node_type = NodeType::from_value(int(fields[1])?)?;
    let position = Point3::new(float(fields[2])?, float(fields[3])?, float(fields[4])?);
    let radius = float(fields[5])?;
    let parent = int(fields[6])?;

    Ok(Record {
        node: Node::new(id, node_type, position, radius),
        parent,
    })
}

/// Parses SWC text into a [`NeuronMorphology`].
///
/// Blank lines and lines whose first non-whitespace character is `#` are ignored;
/// every other line must be a valid seven-field record. Parent edges are attached
/// after all nodes are read, so records may reference parents declared later in
/// the file.
///
/// # Errors
/// - [`Error::MalformedLine`] for a wrong token count or an unparsable numeric field
/// - [`Error::InvalidNodeType`] for a type code outside 0-7
/// - [`Error::InvalidNode`] / [`Error::DuplicateNode`] for bad or repeated sample ids
/// - [`Error::UnknownNode`] for a parent id never declared by any record
/// - [`Error::Cycle`] / [`Error::DuplicateParent`] if the records do not describe a tree
pub fn parse_swc(text: &str) -> Result<NeuronMorphology> {
    let mut morphology = NeuronMorphology::new();
    let mut edges: Vec<(NodeId, NodeId)> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let record = parse_record(line, index + 1)?;
        let id = record.node.id;
        morphology.add_node(record.node)?;
        if record.parent >= 0 {
            edges.push((id, record.parent));
        }
    }

    for (child, parent) in edges {
        morphology.add_edge(child, parent)?;
    }
    Ok(morphology)
}

impl FromStr for NeuronMorphology {
    type Err = Error;

    fn from_str(text: &str) -> Result<NeuronMorphology> {
        parse_swc(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_root() {
        let m = parse_swc("1 1 0 0 0 1 -1\n").unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.parent_of(1), None);
        assert_eq!(m.root(), Some(1));
        let node = m.node(1).unwrap();
        assert_eq!(node.node_type, NodeType::Soma);
        assert_eq!(node.radius, 1.0);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let m = parse_swc(
            "# exported from reconstruction suite\n\
             \n\
             \t  \n\
             1 1 0 0 0 1 -1\n\
             # trailing comment\n\
             2 3 1 0 0 1 1\n",
        )
        .unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.parent_of(2), Some(1));
    }

    #[test]
    fn test_parse_zero_is_a_real_parent_reference() {
        // node ids starting at 0: the root is a valid parent for its children
        let m = parse_swc("0 1 2 3 4 5 -1\n1 1 2 3 4 5 0\n2 1 2 3 4 5 0\n").unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.parent_of(1), Some(0));
        assert_eq!(m.parent_of(2), Some(0));
        assert_eq!(m.branch_points(), vec![0]);
    }

    #[test]
    fn test_parse_branch_points_two_levels() {
        let m = parse_swc(
            "0 1 2 3 4 5 -1\n\
             1 1 2 3 4 5 0\n\
             2 1 2 3 4 5 0\n\
             3 1 2 3 4 5 1\n\
             4 1 2 3 4 5 1\n",
        )
        .unwrap();
        assert_eq!(m.branch_points(), vec![0, 1]);
    }

    #[test]
    fn test_parse_forward_parent_reference() {
        let m = parse_swc("2 3 1 0 0 1 1\n1 1 0 0 0 1 -1\n").unwrap();
        assert_eq!(m.parent_of(2), Some(1));
        assert_eq!(m.root(), Some(1));
    }

    #[test]
    fn test_parse_rejects_wrong_token_count() {
        for text in ["1 1 0 0 0 1\n", "1 1 0 0 0 1 -1 9\n", "hello\n"] {
            assert!(matches!(
                parse_swc(text),
                Err(Error::MalformedLine { number: 1, .. })
            ));
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        let result = parse_swc("1 1 0 0 0 1 -1\nx 1 0 0 0 1 1\n");
        match result {
            Err(Error::MalformedLine { line, number }) => {
                assert_eq!(number, 2);
                assert_eq!(line, "x 1 0 0 0 1 1");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }

        // float where an integer is required
        assert!(matches!(
            parse_swc("1.5 1 0 0 0 1 -1\n"),
            Err(Error::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_type() {
        assert!(matches!(
            parse_swc("1 9 0 0 0 1 -1\n"),
            Err(Error::InvalidNodeType(9))
        ));
    }

    #[test]
    fn test_parse_rejects_undeclared_parent() {
        assert!(matches!(
            parse_swc("1 1 0 0 0 1 -1\n2 3 1 0 0 1 7\n"),
            Err(Error::UnknownNode(7))
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_ids() {
        assert!(matches!(
            parse_swc("1 1 0 0 0 1 -1\n1 3 1 0 0 1 -1\n"),
            Err(Error::DuplicateNode(1))
        ));
    }

    #[test]
    fn test_from_str_delegates_to_parse_swc() {
        let m: NeuronMorphology = "1 1 0 0 0 1 -1\n".parse().unwrap();
        assert_eq!(m.len(), 1);
    }
}
