//! Renders a small built-in scene and prints it as ASCII shades.
//!
//! Run with: cargo run -p raycast_renderer --example simple_render

use raycast_core::parse_scene_str;
use raycast_renderer::{render, Color, RenderConfig};

const SCENE: &str = "\
camera, width: 2, height: 1
plane, position: [0, -1, 0], normal: [0, 1, 0], diffuse_color: [0.3, 0.3, 0.3]
sphere, position: [0, 0, -4], radius: 1, diffuse_color: [1, 1, 1]
sphere, position: [-1.5, 0.2, -6], radius: 0.8, diffuse_color: [0.6, 0.6, 0.6]
";

const SHADES: &[u8] = b" .:-=+*#%@";

fn shade(color: Color) -> char {
    let luminance = (0.2126 * color.x + 0.7152 * color.y + 0.0722 * color.z).clamp(0.0, 1.0);
    let index = (luminance * (SHADES.len() - 1) as f64).round() as usize;
    SHADES[index] as char
}

fn main() {
    let scene = match parse_scene_str(SCENE) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error parsing scene: {}", e);
            return;
        }
    };

    let start = std::time::Instant::now();
    let image = match render(&scene, 72, 24, &RenderConfig::default()) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Error rendering: {}", e);
            return;
        }
    };
    println!("Rendered {} objects in {:?}", scene.len(), start.elapsed());

    // Row 0 is the bottom of the image plane
    for row in image.rows().collect::<Vec<_>>().into_iter().rev() {
        let line: String = row.iter().map(|&c| shade(c)).collect();
        println!("{}", line);
    }
}
