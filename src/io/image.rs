//! PNG interop for frames on disk.
//!
//! Colour channels are stored values scaled to `[0, 1]`; no transfer function is applied.

use std::path::Path;

use crate::foundation::core::{Resolution, Vec3};
use crate::foundation::error::{AccrueError, AccrueResult};
use crate::foundation::math::saturate3;
use crate::texture::field::Texture;

/// Build a colour texture from tightly packed RGB8 bytes.
pub fn texture_from_rgb8(width: u32, height: u32, rgb8: &[u8]) -> AccrueResult<Texture<Vec3>> {
    let resolution = Resolution::new(width, height)?;
    let expected = resolution.pixel_count()?.saturating_mul(3);
    if rgb8.len() != expected {
        return Err(AccrueError::validation(format!(
            "rgb8 buffer has {} bytes, expected {expected} for {resolution}",
            rgb8.len()
        )));
    }
    let data = rgb8
        .chunks_exact(3)
        .map(|px| Vec3::new(px[0] as f32, px[1] as f32, px[2] as f32) / 255.0)
        .collect();
    Texture::new(resolution, data)
}

/// Quantize a colour texture to packed RGB8, saturating out-of-range values.
pub fn rgb8_from_texture(tex: &Texture<Vec3>) -> Vec<u8> {
    let mut out = Vec::with_capacity(tex.data().len() * 3);
    for px in tex.data() {
        let q = (saturate3(*px) * 255.0).round();
        out.extend_from_slice(&[q.x as u8, q.y as u8, q.z as u8]);
    }
    out
}

/// Decode an encoded image (any format the `image` crate knows) into a colour texture.
pub fn decode_color(bytes: &[u8]) -> AccrueResult<Texture<Vec3>> {
    let img = ::image::load_from_memory(bytes)
        .map_err(|e| AccrueError::image(format!("decode color image: {e}")))?
        .to_rgb8();
    let (width, height) = img.dimensions();
    texture_from_rgb8(width, height, img.as_raw())
}

/// Decode an encoded image into raw depth in `[0, 1]` from its 16-bit luma.
pub fn decode_depth(bytes: &[u8]) -> AccrueResult<Texture<f32>> {
    let img = ::image::load_from_memory(bytes)
        .map_err(|e| AccrueError::image(format!("decode depth image: {e}")))?
        .to_luma16();
    let (width, height) = img.dimensions();
    let data = img.as_raw().iter().map(|v| f32::from(*v) / 65535.0).collect();
    Texture::new(Resolution::new(width, height)?, data)
}

/// Load a colour frame from disk.
pub fn load_color(path: &Path) -> AccrueResult<Texture<Vec3>> {
    let bytes = read(path)?;
    decode_color(&bytes).map_err(|e| in_file(e, path))
}

/// Load a raw depth frame from a grayscale image on disk.
pub fn load_depth(path: &Path) -> AccrueResult<Texture<f32>> {
    let bytes = read(path)?;
    decode_depth(&bytes).map_err(|e| in_file(e, path))
}

/// Write a colour texture as an RGB8 PNG.
pub fn save_rgb8(tex: &Texture<Vec3>, path: &Path) -> AccrueResult<()> {
    ::image::save_buffer_with_format(
        path,
        &rgb8_from_texture(tex),
        tex.width(),
        tex.height(),
        ::image::ColorType::Rgb8,
        ::image::ImageFormat::Png,
    )
    .map_err(|e| AccrueError::image(format!("write png '{}': {e}", path.display())))
}

fn read(path: &Path) -> AccrueResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| AccrueError::io(format!("read '{}': {e}", path.display())))
}

fn in_file(err: AccrueError, path: &Path) -> AccrueError {
    match err {
        AccrueError::Image(msg) => AccrueError::image(format!("'{}': {msg}", path.display())),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/image.rs"]
mod tests;
