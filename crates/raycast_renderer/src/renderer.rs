//! Core raycasting renderer.
//!
//! One ray per pixel, flat diffuse color of the closest hit:
//! - The eye sits at the camera position, the image plane one unit down -Z
//! - Rows may be rendered in parallel with rayon
//! - Colors are written raw, with no clamping or gamma

use std::time::Instant;

use raycast_core::{Camera, Scene};
use raycast_math::{Color, Ray, Vector3};
use rayon::prelude::*;
use thiserror::Error;

use crate::intersect::{find_closest_hit, has_geometry};

/// Errors that can occur when rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No objects were read in")]
    NoObjectsParsed,
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Render rows in parallel with rayon
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Color::ZERO,
            parallel: true,
        }
    }
}

/// Image-plane geometry for a given output resolution.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    eye: Vector3,
    left: f64,
    bottom: f64,
    plane_z: f64,
    pixel_width: f64,
    pixel_height: f64,
}

impl Viewport {
    /// Lay out `width` x `height` pixels over the camera's image plane.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let eye = camera.position();
        Self {
            eye,
            left: eye.x - camera.world_width / 2.0,
            bottom: eye.y - camera.world_height / 2.0,
            plane_z: eye.z - 1.0,
            pixel_width: camera.world_width / width as f64,
            pixel_height: camera.world_height / height as f64,
        }
    }

    /// World-space center of the pixel at (`row`, `column`).
    ///
    /// Row 0 has the lowest y.
    pub fn pixel_center(&self, row: u32, column: u32) -> Vector3 {
        Vector3::new(
            self.left + self.pixel_width * (column as f64 + 0.5),
            self.bottom + self.pixel_height * (row as f64 + 0.5),
            self.plane_z,
        )
    }

    /// Unit camera ray through the pixel at (`row`, `column`).
    pub fn ray(&self, row: u32, column: u32) -> Ray {
        let target = self.pixel_center(row, column) - self.eye;
        Ray::from_unit(self.eye, target.x, target.y, target.z)
    }
}

/// Row-major buffer of raw pixel colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new pixel buffer filled with `color`.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Iterate over rows, starting with row 0.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Compute the color of one pixel.
pub fn render_pixel(
    scene: &Scene,
    viewport: &Viewport,
    row: u32,
    column: u32,
    config: &RenderConfig,
) -> Color {
    let ray = viewport.ray(row, column);
    match find_closest_hit(&ray, &scene.objects) {
        Some(hit) => scene.objects[hit.index]
            .diffuse_color()
            .unwrap_or(Color::ZERO),
        None => config.background,
    }
}

fn render_row(
    scene: &Scene,
    viewport: &Viewport,
    row: u32,
    pixels: &mut [Color],
    config: &RenderConfig,
) {
    for (column, pixel) in pixels.iter_mut().enumerate() {
        *pixel = render_pixel(scene, viewport, row, column as u32, config);
    }
}

/// Render the entire scene to a `width` x `height` pixel buffer.
///
/// The scene must contain at least one object. Lights count, even though
/// they never show up in the image.
pub fn render(
    scene: &Scene,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<PixelBuffer> {
    if scene.is_empty() {
        return Err(RenderError::NoObjectsParsed);
    }

    for (index, object) in scene.objects.iter().enumerate() {
        if !object.is_light() && !has_geometry(object) {
            log::warn!("Object {} ({}) is missing geometry and will never be hit", index, object.kind());
        }
    }

    let mut image = PixelBuffer::new(width, height, config.background);
    if width == 0 || height == 0 {
        return Ok(image);
    }

    let start = Instant::now();
    let viewport = Viewport::new(&scene.camera, width, height);
    let row_len = width as usize;

    if config.parallel {
        image
            .pixels
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(row, pixels)| render_row(scene, &viewport, row as u32, pixels, config));
    } else {
        for (row, pixels) in image.pixels.chunks_mut(row_len).enumerate() {
            render_row(scene, &viewport, row as u32, pixels, config);
        }
    }

    log::info!(
        "Rendered {}x{} ({} objects) in {:?}",
        width,
        height,
        scene.len(),
        start.elapsed()
    );

    Ok(image)
}
