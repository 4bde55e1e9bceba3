//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/basic.txt

use std::env;

use raycast_core::{load_scene, SceneObject};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: load_scene <path-to-scene-file>");
        println!("\nExamples:");
        println!("  cargo run --example load_scene -- scenes/basic.txt");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!(
                "\n=== Camera: {} x {} ===",
                scene.camera.world_width, scene.camera.world_height
            );
            println!("Objects: {}", scene.len());

            println!("\n--- Objects ---");
            for (i, object) in scene.objects.iter().enumerate() {
                match object {
                    SceneObject::Sphere(s) => println!(
                        "  [{}] sphere at {:?}, radius {:?}, diffuse {:?}",
                        i, s.position, s.radius, s.diffuse_color
                    ),
                    SceneObject::Plane(p) => println!(
                        "  [{}] plane at {:?}, normal {:?}, diffuse {:?}",
                        i, p.position, p.normal, p.diffuse_color
                    ),
                    SceneObject::Light(l) => println!(
                        "  [{}] light at {:?}, color {:?}",
                        i, l.position, l.color
                    ),
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
