//! History reprojection: follow the motion vector into last frame's accumulation, resample it,
//! and clip the result into the current neighbourhood.

use crate::color::space::{rgb_to_ycbcr, ycbcr_to_rgb};
use crate::filter::neighborhood::Neighborhood;
use crate::foundation::core::{Vec2, Vec3, Vec4};
use crate::texture::field::Texture;

/// Catmull-Rom resample of `tex` at `uv` using 5 bilinear taps.
///
/// The four corner taps of the 16-tap kernel are dropped and the remaining weights renormalized by
/// `1 / (1 - 0.25 * (f - f²).x * (f - f²).y)`, which stays within `[1, 1.016]`. Negative lobes can
/// undershoot, so the result is floored at zero.
pub fn sample_bicubic5(tex: &Texture<Vec4>, uv: Vec2) -> Vec4 {
    let size = Vec2::new(tex.width() as f32, tex.height() as f32);
    let inv = size.recip();

    let pos = uv * size;
    let tc1 = (pos - 0.5).floor() + 0.5;
    let f = pos - tc1;
    let f2 = f * f;
    let f3 = f2 * f;

    let w0 = f2 - 0.5 * (f3 + f);
    let w1 = 1.5 * f3 - 2.5 * f2 + 1.0;
    let w3 = 0.5 * (f3 - f2);
    let w12 = 1.0 - w0 - w3;
    let w2 = w12 - w1;

    let tc0 = (tc1 - 1.0) * inv;
    let tc3 = (tc1 + 2.0) * inv;
    let tc12 = (tc1 + w2 / w12) * inv;

    let sum = tex.sample_linear(Vec2::new(tc12.x, tc0.y)) * (w12.x * w0.y)
        + tex.sample_linear(Vec2::new(tc0.x, tc12.y)) * (w0.x * w12.y)
        + tex.sample_linear(Vec2::new(tc12.x, tc12.y)) * (w12.x * w12.y)
        + tex.sample_linear(Vec2::new(tc3.x, tc12.y)) * (w3.x * w12.y)
        + tex.sample_linear(Vec2::new(tc12.x, tc3.y)) * (w12.x * w3.y);

    let a = f - f2;
    let norm = 1.0 / (1.0 - a.x * a.y * 0.25);
    (sum * norm).max(Vec4::ZERO)
}

/// Clamp a `(Y, Cb, Cr)` colour into the neighbourhood bounds.
pub fn clip_ycbcr(ycc: Vec3, nb: &Neighborhood) -> Vec3 {
    ycc.clamp(nb.min.truncate(), nb.max.truncate())
}

/// Clamp an RGB colour into the neighbourhood bounds, clipping in transformed space.
pub fn clip_to_neighborhood(rgb: Vec3, nb: &Neighborhood) -> Vec3 {
    ycbcr_to_rgb(clip_ycbcr(rgb_to_ycbcr(rgb), nb))
}

/// History lookup for one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reprojection {
    /// Motion vector sampled at the pixel, in UV units.
    pub motion: Vec2,
    /// Position of the pixel in the previous frame.
    pub last_uv: Vec2,
    /// Point-sampled linear depth from depth history.
    pub last_depth: f32,
    /// Resampled history: accumulated RGB plus carried sharpness.
    pub history: Vec4,
    /// History RGB after clipping into the neighbourhood.
    pub clipped: Vec3,
}

/// Reproject the history for the pixel centred at `uv`.
pub fn reproject(
    history_color: &Texture<Vec4>,
    history_depth: &Texture<f32>,
    motion: &Texture<Vec2>,
    uv: Vec2,
    nb: &Neighborhood,
) -> Reprojection {
    let mv = motion.sample_point(uv);
    let last_uv = uv + mv;
    let last_depth = history_depth.sample_point(last_uv);
    let history = sample_bicubic5(history_color, last_uv);
    let clipped = clip_to_neighborhood(history.truncate(), nb);
    Reprojection {
        motion: mv,
        last_uv,
        last_depth,
        history,
        clipped,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/reproject.rs"]
mod tests;
