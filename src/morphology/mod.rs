//! Neuron morphology graph model and analysis.
//!
//! This module contains the in-memory representation of a neuron's skeletal
//! morphology and everything that operates on it directly:
//!
//! # Key Components
//!
//! ## Data Model
//! - [`Node`], [`NodeId`], [`NodeType`], [`Point3`] - One morphological sample and
//!   its parts
//! - [`NeuronMorphology`] - The aggregate graph: samples plus directed parent edges
//!
//! ## Topology and Geometry Queries
//! - [`NeuronMorphology::branch_points`] - Samples with two or more children
//! - [`NeuronMorphology::branch_angle`] / [`NeuronMorphology::branch_angles`] -
//!   Angles between neighboring segments
//! - [`NeuronMorphology::path_length`] / [`NeuronMorphology::total_length`] /
//!   [`NeuronMorphology::distance_between`] - Euclidean measurements
//! - [`NeuronMorphology::closest_node`] - Nearest sample to an arbitrary position
//!
//! ## Transforms and Simplification
//! - [`NeuronMorphology::translate`] / [`NeuronMorphology::scale`] /
//!   [`NeuronMorphology::rotate`] and their copying counterparts, with [`Scale`]
//!   selecting uniform or per-axis scaling
//! - [`NeuronMorphology::smoothed`] - Collapses pass-through chains down to the
//!   topological skeleton
//!
//! Conversion between morphologies and SWC text lives in [`crate::format`].

mod graph;
mod node;
mod smooth;
mod transform;

pub use graph::NeuronMorphology;
pub use node::{Node, NodeId, NodeType, Point3};
pub use transform::{Scale, ROTATION_PRECISION};
