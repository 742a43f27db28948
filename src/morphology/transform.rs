//! Affine transforms over neuron morphologies.
//!
//! Every operation comes in two forms, following the usual Rust split instead of a
//! boolean `in_place` flag:
//!
//! - A borrowing form ([`NeuronMorphology::translated`], [`NeuronMorphology::scaled`],
//!   [`NeuronMorphology::rotated`]) that leaves the receiver untouched and returns an
//!   independent morphology with the same topology and transformed positions.
//! - An in-place form ([`NeuronMorphology::translate`], [`NeuronMorphology::scale`],
//!   [`NeuronMorphology::rotate`]) that mutates the receiver.
//!
//! Rotation uses intrinsic yaw → pitch → roll Euler angles in radians and rounds each
//! resulting coordinate to [`ROTATION_PRECISION`] decimal digits so that re-serialized
//! coordinates keep a bounded textual footprint.
//!
//! # Usage Examples
//!
//! ```rust
//! use morphoscope::morphology::{NeuronMorphology, Node, NodeType, Point3, Scale};
//!
//! let mut morphology = NeuronMorphology::new();
//! morphology.add_node(Node::new(1, NodeType::Soma, Point3::new(0.0, 1.0, 5.0), 1.0))?;
//!
//! let shifted = morphology.translated(5.0, 10.0, 15.0);
//! assert_eq!(shifted.node(1).unwrap().position, Point3::new(5.0, 11.0, 20.0));
//! // the source is untouched
//! assert_eq!(morphology.node(1).unwrap().position, Point3::new(0.0, 1.0, 5.0));
//!
//! morphology.scale(Scale::Uniform(2.0));
//! assert_eq!(morphology.node(1).unwrap().position, Point3::new(0.0, 2.0, 10.0));
//! # Ok::<(), morphoscope::Error>(())
//! ```

use crate::morphology::NeuronMorphology;

/// Default number of decimal digits kept after a rotation.
pub const ROTATION_PRECISION: i32 = 10;

/// A scaling factor: one scalar for all axes, or three independent per-axis factors.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Scale {
    /// The same factor applied to x, y, and z
    Uniform(f64),
    /// Independent factors for x, y, and z
    PerAxis(f64, f64, f64),
}

impl Scale {
    /// The per-axis factors this scale expands to.
    #[must_use]
    pub fn factors(self) -> (f64, f64, f64) {
        match self {
            Scale::Uniform(factor) => (factor, factor, factor),
            Scale::PerAxis(x, y, z) => (x, y, z),
        }
    }
}

impl From<f64> for Scale {
    fn from(factor: f64) -> Scale {
        Scale::Uniform(factor)
    }
}

impl From<(f64, f64, f64)> for Scale {
    fn from((x, y, z): (f64, f64, f64)) -> Scale {
        Scale::PerAxis(x, y, z)
    }
}

/// Rounds to `digits` decimal digits.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

impl NeuronMorphology {
    /// Adds `(dx, dy, dz)` to every sample position in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for node in self.nodes_mut() {
            node.position.x += dx;
            node.position.y += dy;
            node.position.z += dz;
        }
    }

    /// Returns an independent copy translated by `(dx, dy, dz)`.
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> NeuronMorphology {
        let mut result = self.clone();
        result.translate(dx, dy, dz);
        result
    }

    /// Multiplies every sample position component-wise by `scale`, in place.
    pub fn scale(&mut self, scale: impl Into<Scale>) {
        let (sx, sy, sz) = scale.into().factors();
        for node in self.nodes_mut() {
            node.position.x *= sx;
            node.position.y *= sy;
            node.position.z *= sz;
        }
    }

    /// Returns an independent copy scaled by `scale`.
    #[must_use]
    pub fn scaled(&self, scale: impl Into<Scale>) -> NeuronMorphology {
        let mut result = self.clone();
        result.scale(scale);
        result
    }

    /// Rotates every sample position by intrinsic yaw → pitch → roll Euler angles
    /// (radians), in place, rounding coordinates to [`ROTATION_PRECISION`] digits.
    pub fn rotate(&mut self, pitch: f64, roll: f64, yaw: f64) {
        self.rotate_with_precision(pitch, roll, yaw, ROTATION_PRECISION);
    }

    /// Like [`NeuronMorphology::rotate`], with an explicit rounding precision in
    /// decimal digits.
    pub fn rotate_with_precision(&mut self, pitch: f64, roll: f64, yaw: f64, precision: i32) {
        let (sin_p, cos_p) = pitch.sin_cos();
        let (sin_r, cos_r) = roll.sin_cos();
        let (sin_y, cos_y) = yaw.sin_cos();

        // Combined rotation matrix for intrinsic yaw -> pitch -> roll, row major.
        let rotation = [
            [
                cos_y * cos_p,
                cos_y * sin_p * sin_r - sin_y * cos_r,
                cos_y * sin_p * cos_r + sin_y * sin_r,
            ],
            [
                sin_y * cos_p,
                sin_y * sin_p * sin_r + cos_y * cos_r,
                sin_y * sin_p * cos_r - cos_y * sin_r,
            ],
            [-sin_p, cos_p * sin_r, cos_p * cos_r],
        ];

        for node in self.nodes_mut() {
            let (x, y, z) = (node.position.x, node.position.y, node.position.z);
            let rotated = [
                rotation[0][0] * x + rotation[0][1] * y + rotation[0][2] * z,
                rotation[1][0] * x + rotation[1][1] * y + rotation[1][2] * z,
                rotation[2][0] * x + rotation[2][1] * y + rotation[2][2] * z,
            ];
            node.position.x = round_to(rotated[0], precision);
            node.position.y = round_to(rotated[1], precision);
            node.position.z = round_to(rotated[2], precision);
        }
    }

    /// Returns an independent copy rotated by intrinsic yaw → pitch → roll Euler
    /// angles (radians), coordinates rounded to [`ROTATION_PRECISION`] digits.
    #[must_use]
    pub fn rotated(&self, pitch: f64, roll: f64, yaw: f64) -> NeuronMorphology {
        let mut result = self.clone();
        result.rotate(pitch, roll, yaw);
        result
    }

    /// Like [`NeuronMorphology::rotated`], with an explicit rounding precision in
    /// decimal digits.
    #[must_use]
    pub fn rotated_with_precision(
        &self,
        pitch: f64,
        roll: f64,
        yaw: f64,
        precision: i32,
    ) -> NeuronMorphology {
        let mut result = self.clone();
        result.rotate_with_precision(pitch, roll, yaw, precision);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::{Node, NodeType, Point3};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn single(position: (f64, f64, f64)) -> NeuronMorphology {
        let mut m = NeuronMorphology::new();
        m.add_node(Node::new(1, NodeType::Soma, position.into(), 1.0))
            .unwrap();
        m
    }

    #[test]
    fn test_translate_in_place_and_copying() {
        let mut m = single((0.0, 0.0, 5.0));
        let shifted = m.translated(5.0, 10.0, 15.0);
        assert_eq!(shifted.node(1).unwrap().position, Point3::new(5.0, 10.0, 20.0));
        assert_eq!(m.node(1).unwrap().position, Point3::new(0.0, 0.0, 5.0));

        m.translate(5.0, 10.0, 15.0);
        assert_eq!(m.node(1).unwrap().position, Point3::new(5.0, 10.0, 20.0));
    }

    #[test]
    fn test_scale_uniform_and_per_axis() {
        let m = single((0.0, 1.0, 5.0));
        let per_axis = m.scaled((100.0, 2.0, 3.0));
        assert_eq!(per_axis.node(1).unwrap().position, Point3::new(0.0, 2.0, 15.0));
        assert_eq!(m.node(1).unwrap().position, Point3::new(0.0, 1.0, 5.0));

        let uniform = m.scaled(2.0);
        assert_eq!(uniform.node(1).unwrap().position, Point3::new(0.0, 2.0, 10.0));
    }

    #[test]
    fn test_rotate_quarter_turn_yaw() {
        let mut m = single((0.0, 1.0, 5.0));
        m.rotate(0.0, 0.0, FRAC_PI_2);
        let position = m.node(1).unwrap().position;
        assert!((position.x - -1.0).abs() < 1e-9);
        assert!(position.y.abs() < 1e-9);
        assert!((position.z - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_rounds_coordinates() {
        let m = single((0.0, 1.0, 5.0)).rotated(0.0, 0.0, FRAC_PI_2);
        // sin/cos residue like 6.123e-17 rounds away at 10 digits
        assert_eq!(m.node(1).unwrap().position, Point3::new(-1.0, 0.0, 5.0));

        let coarse = single((0.0, 1.0, 0.0)).rotated_with_precision(0.0, 0.0, PI / 3.0, 2);
        let position = coarse.node(1).unwrap().position;
        assert_eq!(position.x, -0.87);
        assert_eq!(position.y, 0.5);
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        let m = single((3.5, -2.25, 7.125)).rotated(2.0 * PI, 2.0 * PI, 2.0 * PI);
        let position = m.node(1).unwrap().position;
        assert_eq!(position, Point3::new(3.5, -2.25, 7.125));
    }

    #[test]
    fn test_total_length_scales_linearly() {
        let mut m = NeuronMorphology::new();
        m.add_node(Node::new(1, NodeType::Soma, Point3::new(0.0, 0.0, 0.0), 1.0))
            .unwrap();
        m.add_node(Node::new(2, NodeType::Axon, Point3::new(0.0, 3.0, 4.0), 1.0))
            .unwrap();
        m.add_edge(2, 1).unwrap();

        let total = m.total_length();
        assert!(total >= 0.0);
        let scaled = m.scaled(3.0);
        assert!((scaled.total_length() - 3.0 * total).abs() < 1e-9);
    }
}
