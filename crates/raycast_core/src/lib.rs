//! Raycast Core - scene description types and text format support.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Camera`, `SceneObject` (`Sphere`, `Plane`, `Light`)
//! - **Parser**: the line-oriented scene format, one object per line
//! - **Writer**: serialization back to the same format
//!
//! # Example
//!
//! ```ignore
//! use raycast_core::load_scene;
//!
//! let scene = load_scene("scene.txt")?;
//! println!("Camera {}x{}, {} objects",
//!     scene.camera.world_width,
//!     scene.camera.world_height,
//!     scene.len());
//! ```

pub mod error;
pub mod numeric;
pub mod parser;
pub mod scene;
pub mod writer;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use parser::{load_scene, parse_scene, parse_scene_str, ParseOptions, SceneParser};
pub use scene::{
    Camera, Light, ObjectKind, Plane, Property, PropertyValue, Scene, SceneObject, Sphere,
    ValueRule, DEFAULT_MAX_OBJECTS,
};
pub use writer::write_scene;
