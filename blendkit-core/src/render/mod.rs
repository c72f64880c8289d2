//! Boundary types consumed by an external mesh renderer.

pub(crate) mod draw;
pub(crate) mod mesh;
pub(crate) mod shader;
pub(crate) mod shading;
