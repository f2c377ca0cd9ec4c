//! Reversible RGB <-> luma/chroma mapping used for neighbourhood clamping.
//!
//! Clamping and contrast measurement happen on a luma-dominant axis so that strongly coloured but
//! photometrically similar pixels do not register as ghosts.

use glam::Vec3;

const LUMA: Vec3 = Vec3::new(0.299, 0.587, 0.114);
const CB_SCALE: f32 = 0.565;
const CR_SCALE: f32 = 0.713;

// Exact algebraic inverse of the forward matrix (1.403, 0.344, 0.714, 1.770 to three places).
const CR_TO_R: f32 = 1.0 / CR_SCALE;
const CB_TO_B: f32 = 1.0 / CB_SCALE;
const CR_TO_G: f32 = 0.299 / (0.587 * CR_SCALE);
const CB_TO_G: f32 = 0.114 / (0.587 * CB_SCALE);

/// Convert RGB into `(Y, Cb, Cr)`.
pub fn rgb_to_ycbcr(rgb: Vec3) -> Vec3 {
    let y = rgb.dot(LUMA);
    Vec3::new(y, (rgb.z - y) * CB_SCALE, (rgb.x - y) * CR_SCALE)
}

/// Inverse of [`rgb_to_ycbcr`].
pub fn ycbcr_to_rgb(ycc: Vec3) -> Vec3 {
    let (y, cb, cr) = (ycc.x, ycc.y, ycc.z);
    Vec3::new(
        y + CR_TO_R * cr,
        y - CB_TO_G * cb - CR_TO_G * cr,
        y + CB_TO_B * cb,
    )
}

/// Luma of an RGB triple.
pub fn luma(rgb: Vec3) -> f32 {
    rgb.dot(LUMA)
}

#[cfg(test)]
#[path = "../../tests/unit/color/space.rs"]
mod tests;
