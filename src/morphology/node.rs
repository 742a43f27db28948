//! Sample point primitives for neuron morphologies.
//!
//! This module defines the building blocks stored in a [`crate::morphology::NeuronMorphology`]:
//!
//! - [`NodeId`] - Identifier of one morphological sample
//! - [`NodeType`] - The SWC structure classification (soma, axon, dendrite, ...)
//! - [`Point3`] - A 3D position with the small amount of vector math the analysis needs
//! - [`Node`] - One complete sample: identity, classification, position, and radius
//!
//! # Usage Examples
//!
//! ```rust
//! use morphoscope::morphology::{Node, NodeType, Point3};
//!
//! let soma = Node::new(1, NodeType::Soma, Point3::new(0.0, 0.0, 0.0), 4.5);
//! assert_eq!(soma.node_type, NodeType::Soma);
//! assert_eq!(soma.position.distance(&Point3::new(3.0, 4.0, 0.0)), 5.0);
//! ```

use strum::{EnumCount, EnumIter};

use crate::Result;

/// Identifier of a morphological sample point.
///
/// Stored signed because the SWC parent field uses `-1` as the "no parent" sentinel;
/// within a valid morphology every node id is non-negative.
pub type NodeId = i64;

/// Structure classification of a sample, as defined by the SWC format.
///
/// The numeric values correspond to the type codes used in SWC text. Values outside
/// 0-7 are rejected by [`NodeType::from_value`] during strict parsing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumIter, EnumCount)]
pub enum NodeType {
    /// Type 0 - structure not specified
    Undefined = 0,
    /// Type 1 - cell body
    Soma = 1,
    /// Type 2 - axon
    Axon = 2,
    /// Type 3 - (basal) dendrite
    Dendrite = 3,
    /// Type 4 - apical dendrite
    ApicalDendrite = 4,
    /// Type 5 - fork point
    ForkPoint = 5,
    /// Type 6 - end point
    EndPoint = 6,
    /// Type 7 - custom
    Custom = 7,
}

impl NodeType {
    /// Converts a raw SWC type code into a [`NodeType`].
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidNodeType`] for values outside 0-7.
    pub fn from_value(value: i64) -> Result<NodeType> {
        match value {
            0 => Ok(NodeType::Undefined),
            1 => Ok(NodeType::Soma),
            2 => Ok(NodeType::Axon),
            3 => Ok(NodeType::Dendrite),
            4 => Ok(NodeType::ApicalDendrite),
            5 => Ok(NodeType::ForkPoint),
            6 => Ok(NodeType::EndPoint),
            7 => Ok(NodeType::Custom),
            _ => Err(crate::Error::InvalidNodeType(value)),
        }
    }

    /// The numeric SWC type code for this classification.
    #[must_use]
    pub fn value(self) -> i64 {
        self as i64
    }
}

/// A position in 3D space, in the micrometer coordinates SWC files use.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Point3 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Point3 {
    /// Creates a new point from its three coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { x, y, z }
    }

    /// Component-wise difference `self - other`, the vector from `other` to `self`.
    #[must_use]
    pub fn sub(&self, other: &Point3) -> Point3 {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &Point3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length of this point treated as a vector from the origin.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Point3) -> f64 {
        self.sub(other).norm()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Point3 {
        Point3::new(x, y, z)
    }
}

/// One morphological sample: identity, classification, 3D position, and radius.
///
/// Equality compares all fields exactly; positions are `f64` and compare bitwise-equal
/// after a lossless round trip through SWC text.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Node {
    /// Identifier, unique within a morphology
    pub id: NodeId,
    /// SWC structure classification
    pub node_type: NodeType,
    /// Position of the sample
    pub position: Point3,
    /// Radius of the neurite at this sample, non-negative
    pub radius: f64,
}

impl Node {
    /// Creates a new sample point.
    #[must_use]
    pub const fn new(id: NodeId, node_type: NodeType, position: Point3, radius: f64) -> Node {
        Node {
            id,
            node_type,
            position,
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_node_type_round_trips_through_value() {
        for node_type in NodeType::iter() {
            assert_eq!(NodeType::from_value(node_type.value()).unwrap(), node_type);
        }
    }

    #[test]
    fn test_node_type_rejects_out_of_range() {
        for value in [-1, 8, 42, i64::MAX] {
            assert!(matches!(
                NodeType::from_value(value),
                Err(crate::Error::InvalidNodeType(v)) if v == value
            ));
        }
    }

    #[test]
    fn test_point_math() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 7.0);
        assert_eq!(a.distance(&b), 4.0);
        assert_eq!(b.sub(&a), Point3::new(0.0, 0.0, 4.0));
        assert_eq!(a.dot(&b), 1.0 + 4.0 + 21.0);
        assert_eq!(Point3::new(3.0, 4.0, 0.0).norm(), 5.0);
    }
}
