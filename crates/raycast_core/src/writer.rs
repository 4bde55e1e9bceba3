//! Scene serialization in the same text format the parser reads.

use std::fmt;

use raycast_math::Vector3;

use crate::scene::{Camera, Property, PropertyValue, Scene, SceneObject};

/// Serialize `scene` so that parsing the result yields an equal scene.
///
/// Overridden keywords are written back as repeats of the last property, so
/// each line carries as many entries as the one it was parsed from.
pub fn write_scene(scene: &Scene) -> String {
    scene.to_string()
}

/// Format a number so it survives the parser's literal-zero check.
///
/// Zero of either sign is written as the literal `0`.
fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn vector(v: Vector3) -> String {
    format!("[{}, {}, {}]", number(v.x), number(v.y), number(v.z))
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "camera, width: {}, height: {}",
            number(self.world_width),
            number(self.world_height)
        )
    }
}

impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = self.kind().keyword().to_string();
        let mut last = None;
        for property in Property::ALL {
            let value = match self.get(property) {
                Some(PropertyValue::Vector(v)) => vector(v),
                Some(PropertyValue::Scalar(x)) => number(x),
                None => continue,
            };
            let entry = format!(", {}: {}", property.keyword(), value);
            line.push_str(&entry);
            last = Some(entry);
        }
        if let Some(entry) = last {
            for _ in 0..self.overridden() {
                line.push_str(&entry);
            }
        }
        f.write_str(&line)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.camera)?;
        for object in &self.objects {
            writeln!(f, "{}", object)?;
        }
        Ok(())
    }
}
