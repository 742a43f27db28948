//! Tree simplification by collapsing pass-through chains.
//!
//! Smoothing reduces a morphology to its topological skeleton: every pass-through
//! sample (exactly one parent and exactly one child) is removed and its two
//! neighbors are connected directly, repeated until none remain. The result keeps
//! only the root, branch points, and end points, and is confluent: the order in
//! which pass-through samples are collapsed does not affect the final topology.
//!
//! The implementation processes a work queue of currently collapsible samples and
//! re-examines the two spliced neighbors after each removal, instead of rescanning
//! the whole graph per pass. Collapsing never creates a cycle and never changes
//! any surviving sample's child count, but the rescan guards the invariant rather
//! than assuming it.
//!
//! # Usage Examples
//!
//! ```rust
//! use morphoscope::format::parse_swc;
//!
//! // a chain 1-2-3 with a branch at 3 into leaves 4 and 5
//! let morphology = parse_swc(
//!     "1 1 0 0 0 1 -1\n\
//!      2 3 0 0 1 1 1\n\
//!      3 3 0 0 2 1 2\n\
//!      4 3 0 1 3 1 3\n\
//!      5 3 1 0 3 1 3\n",
//! )?;
//! let smoothed = morphology.smoothed();
//!
//! // 2 was a pass-through sample and is gone; the branch point and leaves remain
//! assert_eq!(smoothed.len(), 4);
//! assert_eq!(smoothed.parent_of(3), Some(1));
//! # Ok::<(), morphoscope::Error>(())
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use crate::morphology::{NeuronMorphology, NodeId};

impl NeuronMorphology {
    /// Returns an independent copy with every pass-through chain collapsed.
    ///
    /// A pass-through sample has exactly two topological neighbors, one parent
    /// and one child; the root, branch points, and end points are never removed.
    /// Edge direction is preserved through each collapsed chain: the surviving
    /// child's parent becomes the nearest surviving ancestor.
    #[must_use]
    pub fn smoothed(&self) -> NeuronMorphology {
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for node in self.nodes() {
            if let Some(p) = self.parent_of(node.id) {
                parent.insert(node.id, p);
            }
            children.insert(node.id, self.children_of(node.id).to_vec());
        }

        let collapsible = |parent: &HashMap<NodeId, NodeId>,
                           children: &HashMap<NodeId, Vec<NodeId>>,
                           id: NodeId| {
            parent.contains_key(&id) && children.get(&id).is_some_and(|c| c.len() == 1)
        };

        let mut removed: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<NodeId> = self
            .nodes()
            .iter()
            .map(|node| node.id)
            .filter(|&id| collapsible(&parent, &children, id))
            .collect();

        while let Some(id) = queue.pop_front() {
            // An entry may have been spliced away, or stopped being collapsible,
            // since it was queued.
            if removed.contains(&id) || !collapsible(&parent, &children, id) {
                continue;
            }

            let above = parent[&id];
            let below = children[&id][0];

            // Splice: `below` now hangs off `above`, keeping the slot `id` held
            // in `above`'s child list.
            parent.remove(&id);
            parent.insert(below, above);
            if let Some(siblings) = children.get_mut(&above) {
                if let Some(slot) = siblings.iter().position(|&child| child == id) {
                    siblings[slot] = below;
                }
            }
            children.remove(&id);
            removed.insert(id);

            for neighbor in [above, below] {
                if collapsible(&parent, &children, neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        let mut result = NeuronMorphology::new();
        for node in self.nodes() {
            if removed.contains(&node.id) {
                continue;
            }
            result
                .add_node(*node)
                .expect("surviving samples are unique and valid");
        }
        for node in result.nodes().to_vec() {
            if let Some(&p) = parent.get(&node.id) {
                result
                    .add_edge(node.id, p)
                    .expect("spliced edges keep the tree invariant");
            }
        }
        result
    }
}
