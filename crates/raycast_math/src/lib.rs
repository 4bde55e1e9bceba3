// Re-export glam for convenience
pub use glam::*;

/// Three-component `f64` vector used for positions, directions and colors.
pub type Vector3 = DVec3;

/// Raw color channels. Values are stored as parsed, never clamped.
pub type Color = DVec3;

// Raycast math types
mod ray;
pub mod vector;

pub use ray::Ray;
pub use vector::{dot, scale, subtract, unit};
