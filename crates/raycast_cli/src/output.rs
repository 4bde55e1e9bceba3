//! Image file output.
//!
//! Raw buffer colors are multiplied by the configured scale and saturated
//! into 8-bit channels here, and only here. Rows are written in buffer order.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use raycast_renderer::PixelBuffer;

/// Convert one raw channel to 8 bits. NaN maps to 0.
#[inline]
fn to_channel(value: f64, scale: f64) -> u8 {
    (value * scale).clamp(0.0, 255.0) as u8
}

/// Convert a pixel buffer to an 8-bit RGB image.
pub fn to_rgb_image(buffer: &PixelBuffer, scale: f64) -> RgbImage {
    RgbImage::from_fn(buffer.width, buffer.height, |x, y| {
        let color = buffer.get(x, y);
        Rgb([
            to_channel(color.x, scale),
            to_channel(color.y, scale),
            to_channel(color.z, scale),
        ])
    })
}

/// Save a pixel buffer; the format follows the file extension.
pub fn save_image(buffer: &PixelBuffer, path: &Path, scale: f64) -> Result<()> {
    to_rgb_image(buffer, scale)
        .save(path)
        .with_context(|| format!("writing image {}", path.display()))?;
    log::info!(
        "Saved {}x{} image to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycast_renderer::Color;

    #[test]
    fn test_to_channel() {
        assert_eq!(to_channel(1.0, 255.0), 255);
        assert_eq!(to_channel(0.5, 255.0), 127);
        assert_eq!(to_channel(2.0, 255.0), 255);
        assert_eq!(to_channel(-1.0, 255.0), 0);
        assert_eq!(to_channel(200.0, 1.0), 200);
        assert_eq!(to_channel(f64::NAN, 255.0), 0);
    }

    #[test]
    fn test_to_rgb_image() {
        let mut buffer = PixelBuffer::new(2, 1, Color::ZERO);
        buffer.pixels[1] = Color::new(1.0, 0.0, 0.5);
        let image = to_rgb_image(&buffer, 255.0);
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([255, 0, 127]));
    }
}
