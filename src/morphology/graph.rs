//! The neuron morphology graph and its topology and geometry queries.
//!
//! This module provides [`NeuronMorphology`], the central data structure of the crate:
//! an insertion-ordered collection of [`Node`] samples connected by directed parent
//! edges following the SWC convention (an edge child → parent encodes "the child's
//! parent is parent").
//!
//! # Architecture
//!
//! Rather than a general-purpose graph container, the morphology keeps an explicit
//! owned structure: the samples in insertion order, an id → slot index, and two
//! adjacency maps (parent-of, children-of) maintained together on every edge
//! insertion. This gives O(1) parent lookup and O(children) child enumeration, and
//! keeps insertion order available for lossless re-serialization.
//!
//! # Key Invariants
//!
//! - At most one node has no parent (the root); every other node reaches it by
//!   following parent edges.
//! - No cycles: [`NeuronMorphology::add_edge`] walks the parent chain before
//!   committing an edge and rejects anything that would close a loop.
//! - Referential integrity: both endpoints of an edge must already be present.
//! - Node insertion order is preserved and drives all "stable order" query results.
//!
//! # Usage Examples
//!
//! ```rust
//! use morphoscope::morphology::{NeuronMorphology, Node, NodeType, Point3};
//!
//! let mut morphology = NeuronMorphology::new();
//! morphology.add_node(Node::new(1, NodeType::Soma, Point3::new(0.0, 0.0, 0.0), 4.0))?;
//! morphology.add_node(Node::new(2, NodeType::Axon, Point3::new(0.0, 3.0, 4.0), 1.0))?;
//! morphology.add_edge(2, 1)?;
//!
//! assert_eq!(morphology.len(), 2);
//! assert_eq!(morphology.root(), Some(1));
//! assert_eq!(morphology.total_length(), 5.0);
//! # Ok::<(), morphoscope::Error>(())
//! ```

use std::collections::{HashMap, VecDeque};

use crate::{
    morphology::{Node, NodeId, Point3},
    Error, Result,
};

/// An in-memory neuron skeleton: sample points plus directed parent edges.
///
/// Created empty via [`NeuronMorphology::new`] or as an independent copy via
/// [`Clone`]; a clone shares no state with its source, so mutating one never
/// affects the other. Nodes and edges are added incrementally, either by the
/// SWC reader in [`crate::format`] or directly by callers.
#[derive(Clone, Debug, Default)]
pub struct NeuronMorphology {
    /// Samples in insertion order
    nodes: Vec<Node>,
    /// Node id to slot in `nodes`
    index: HashMap<NodeId, usize>,
    /// Child id to its unique parent id
    parent: HashMap<NodeId, NodeId>,
    /// Parent id to child ids, in edge insertion order
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl NeuronMorphology {
    /// Creates an empty morphology.
    #[must_use]
    pub fn new() -> NeuronMorphology {
        NeuronMorphology::default()
    }

    /// Number of samples in the morphology.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the morphology holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a new sample.
    ///
    /// Duplicates are rejected rather than overwritten so that malformed input is
    /// caught early instead of silently corrupting the graph.
    ///
    /// # Errors
    /// - [`Error::InvalidNode`] if the id is negative
    /// - [`Error::DuplicateNode`] if a sample with this id is already present
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if node.id < 0 {
            return Err(Error::InvalidNode(node.id));
        }
        if self.index.contains_key(&node.id) {
            return Err(Error::DuplicateNode(node.id));
        }

        self.index.insert(node.id, self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Inserts a directed parent edge, recording "`child`'s parent is `parent`".
    ///
    /// SWC inputs are acyclic by construction, but a corrupt file could name a
    /// descendant as a parent; the parent chain is walked before the edge is
    /// committed.
    ///
    /// # Errors
    /// - [`Error::UnknownNode`] if either endpoint is absent
    /// - [`Error::DuplicateParent`] if `child` already has a parent
    /// - [`Error::Cycle`] if the edge would close a loop
    pub fn add_edge(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        if !self.index.contains_key(&child) {
            return Err(Error::UnknownNode(child));
        }
        if !self.index.contains_key(&parent) {
            return Err(Error::UnknownNode(parent));
        }
        if self.parent.contains_key(&child) {
            return Err(Error::DuplicateParent(child));
        }

        // Walk from `parent` towards the root; reaching `child` (or `parent` itself
        // for a self-edge) means the new edge would close a loop.
        let mut cursor = parent;
        loop {
            if cursor == child {
                return Err(Error::Cycle(child));
            }
            match self.parent.get(&cursor) {
                Some(&next) => cursor = next,
                None => break,
            }
        }

        self.parent.insert(child, parent);
        self.children.entry(parent).or_default().push(child);
        Ok(())
    }

    /// The sample with the given id, if present.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// All samples, in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to all samples, in insertion order.
    ///
    /// Identifiers must not be modified through this view; it exists so the affine
    /// transforms can rewrite positions without touching the adjacency maps.
    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// The parent of a sample, if it has one.
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(&id).copied()
    }

    /// The children of a sample, in edge insertion order.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.children.get(&id).map_or(&[], Vec::as_slice)
    }

    /// The root: the first inserted sample without a parent, if any.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .map(|node| node.id)
            .find(|id| !self.parent.contains_key(id))
    }

    /// End points: samples without children, in insertion order.
    #[must_use]
    pub fn leaves(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .map(|node| node.id)
            .filter(|id| self.children_of(*id).is_empty())
            .collect()
    }

    /// Total number of topological neighbors of a sample: its children plus its
    /// parent, if it has one.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.children_of(id).len() + usize::from(self.parent.contains_key(&id))
    }

    /// All topological neighbors of a sample: parent first (if any), then children
    /// in edge insertion order.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(self.degree(id));
        if let Some(parent) = self.parent_of(id) {
            result.push(parent);
        }
        result.extend_from_slice(self.children_of(id));
        result
    }

    /// Branch points: samples with two or more children, in insertion order.
    ///
    /// A sample with exactly one child is a pass-through point, not a branch point,
    /// and the root counts only its children when determining branch status.
    #[must_use]
    pub fn branch_points(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .map(|node| node.id)
            .filter(|id| self.children_of(*id).len() >= 2)
            .collect()
    }

    /// The angle at `b` between the vectors `b`→`a` and `b`→`c`, in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` before the arccos so that exactly
    /// parallel or anti-parallel vectors do not drift outside the domain through
    /// floating-point rounding.
    ///
    /// # Errors
    /// - [`Error::UnknownNode`] if any of the three ids is absent
    /// - [`Error::DegenerateGeometry`] if either vector has zero length
    pub fn branch_angle(&self, a: NodeId, b: NodeId, c: NodeId) -> Result<f64> {
        let pos = |id: NodeId| -> Result<Point3> {
            self.node(id)
                .map(|node| node.position)
                .ok_or(Error::UnknownNode(id))
        };

        let (pa, pb, pc) = (pos(a)?, pos(b)?, pos(c)?);
        let ba = pa.sub(&pb);
        let bc = pc.sub(&pb);
        if ba.norm() == 0.0 || bc.norm() == 0.0 {
            return Err(Error::DegenerateGeometry);
        }

        let cosine = ba.dot(&bc) / (ba.norm() * bc.norm());
        Ok(cosine.clamp(-1.0, 1.0).acos())
    }

    /// The angle at every pass-through sample, in insertion order.
    ///
    /// A pass-through sample has exactly two topological neighbors in total,
    /// meaning exactly one parent and exactly one child; branch points (two
    /// children, no parent side required) and leaves are skipped.
    ///
    /// # Errors
    /// Returns [`Error::DegenerateGeometry`] if any visited sample coincides with
    /// one of its neighbors.
    pub fn branch_angles(&self) -> Result<Vec<(NodeId, f64)>> {
        let mut result = Vec::new();
        for node in &self.nodes {
            let children = self.children_of(node.id);
            if children.len() != 1 {
                continue;
            }
            if let Some(parent) = self.parent_of(node.id) {
                result.push((node.id, self.branch_angle(parent, node.id, children[0])?));
            }
        }
        Ok(result)
    }

    /// Euclidean distance between two samples' positions.
    ///
    /// # Errors
    /// Returns [`Error::UnknownNode`] if either id is absent.
    pub fn distance_between(&self, a: NodeId, b: NodeId) -> Result<f64> {
        let from = self.node(a).ok_or(Error::UnknownNode(a))?;
        let to = self.node(b).ok_or(Error::UnknownNode(b))?;
        Ok(from.position.distance(&to.position))
    }

    /// Sum of Euclidean edge lengths along the unique tree path between `start`
    /// and `end`.
    ///
    /// The path is found by breadth-first search over the undirected view of the
    /// tree; since exactly one path exists, unweighted search suffices.
    ///
    /// # Errors
    /// - [`Error::UnknownNode`] if either id is absent
    /// - [`Error::Disconnected`] if no path exists (the structure is a forest)
    pub fn path_length(&self, start: NodeId, end: NodeId) -> Result<f64> {
        if self.node(start).is_none() {
            return Err(Error::UnknownNode(start));
        }
        if self.node(end).is_none() {
            return Err(Error::UnknownNode(end));
        }
        if start == end {
            return Ok(0.0);
        }

        let mut predecessor: HashMap<NodeId, NodeId> = HashMap::new();
        let mut queue = VecDeque::from([start]);
        predecessor.insert(start, start);

        'search: while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if predecessor.contains_key(&neighbor) {
                    continue;
                }
                predecessor.insert(neighbor, current);
                if neighbor == end {
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }

        if !predecessor.contains_key(&end) {
            return Err(Error::Disconnected {
                from: start,
                to: end,
            });
        }

        let mut length = 0.0;
        let mut cursor = end;
        while cursor != start {
            let previous = predecessor[&cursor];
            length += self.distance_between(cursor, previous)?;
            cursor = previous;
        }
        Ok(length)
    }

    /// Sum of Euclidean lengths over every edge in the morphology.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.parent
            .iter()
            .map(|(&child, &parent)| {
                self.nodes[self.index[&child]]
                    .position
                    .distance(&self.nodes[self.index[&parent]].position)
            })
            .sum()
    }

    /// The sample closest to `position`; ties are broken in favor of the sample
    /// inserted first.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGraph`] if the morphology holds no samples.
    pub fn closest_node(&self, position: Point3) -> Result<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for node in &self.nodes {
            let distance = node.position.distance(&position);
            match best {
                Some((_, shortest)) if distance >= shortest => {}
                _ => best = Some((node.id, distance)),
            }
        }
        best.map(|(id, _)| id).ok_or(Error::EmptyGraph)
    }
}
