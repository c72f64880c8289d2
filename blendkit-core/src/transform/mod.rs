//! Homogeneous transform builders and matrix composition.

/// 2D transforms over [`Matrix3`].
pub mod affine;
/// Column-major matrix types and composition primitives.
pub mod matrix;
/// 3D transforms over [`Matrix4`].
pub mod spatial;

pub use matrix::{Matrix3, Matrix4};
