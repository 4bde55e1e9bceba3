//! Raycast Renderer - flat-shaded CPU raycasting.
//!
//! Casts one ray per pixel from the scene camera through the image plane
//! and writes the diffuse color of the closest surface hit, or the
//! background color when nothing is hit. Lights are never hit and no
//! lighting is computed.

mod intersect;
mod renderer;

pub use intersect::{find_closest_hit, plane_intersection, sphere_intersection, Hit, Intersect};
pub use renderer::{
    render, render_pixel, PixelBuffer, RenderConfig, RenderError, RenderResult, Viewport,
};

/// Re-export scene and math types used in the public API
pub use raycast_core::{Camera, Scene, SceneObject};
pub use raycast_math::{Color, Ray, Vector3};
