//! Contrast-adaptive sharpening of the accumulated output.
//!
//! A single-pass unsharp operator whose negative cross weight shrinks as the local box nears
//! black or white, limiting overshoot without a separate clamp.

use crate::filter::neighborhood::DIAGONAL_SCALE;
use crate::foundation::core::{Vec2, Vec3, Vec4};
use crate::foundation::error::AccrueResult;
use crate::foundation::math::{DIV_EPSILON, saturate, saturate3};
use crate::texture::field::{Texture, evaluate_pixels};

/// Fixed contrast knob of the cross-weight formula.
pub const SHARPEN_CONTRAST: f32 = 0.9;

const CROSS: [Vec2; 4] = [
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.0, 1.0),
];

const DIAGONALS: [Vec2; 4] = [
    Vec2::new(-DIAGONAL_SCALE, -DIAGONAL_SCALE),
    Vec2::new(DIAGONAL_SCALE, -DIAGONAL_SCALE),
    Vec2::new(-DIAGONAL_SCALE, DIAGONAL_SCALE),
    Vec2::new(DIAGONAL_SCALE, DIAGONAL_SCALE),
];

/// Per-channel cross weight in `[-1 / (8 - 3c), 0]`.
///
/// Equal to `-1 / (rsqrt(amp) * (8 - 3c))` with `amp = saturate(min(lo, 1 - hi) / hi)`, written
/// without the reciprocal so a black box yields 0 instead of dividing by infinity.
pub fn cross_weight(box_min: Vec3, box_max: Vec3) -> Vec3 {
    let headroom = box_min.min(Vec3::ONE - box_max);
    let amp = headroom / box_max.max(Vec3::splat(DIV_EPSILON));
    let amp = Vec3::new(saturate(amp.x), saturate(amp.y), saturate(amp.z));
    -amp.powf(0.5) / (-3.0 * SHARPEN_CONTRAST + 8.0)
}

/// Sharpen the pixel of `accum` at `uv`, blending by the carried sharpness in alpha.
pub fn sharpen_pixel(accum: &Texture<Vec4>, uv: Vec2, texel: Vec2) -> Vec3 {
    let center_px = accum.sample_linear(uv);
    let center = center_px.truncate();

    let mut box_min = center;
    let mut box_max = center;
    let mut cross_sum = Vec3::ZERO;
    for off in CROSS {
        let s = accum.sample_linear(uv + off * texel).truncate();
        cross_sum += s;
        box_min = box_min.min(s);
        box_max = box_max.max(s);
    }
    for off in DIAGONALS {
        let s = accum.sample_linear(uv + off * texel).truncate();
        box_min = box_min.min(s);
        box_max = box_max.max(s);
    }

    let w = cross_weight(box_min, box_max);
    let rcp_weight = (4.0 * w + 1.0).recip();
    let sharpened = saturate3((cross_sum * w + center) * rcp_weight);

    saturate3(center.lerp(sharpened, saturate(center_px.w)))
}

/// Sharpen every pixel of `accum`, splitting rows across `pool` when given.
pub fn sharpen(
    accum: &Texture<Vec4>,
    pool: Option<&rayon::ThreadPool>,
) -> AccrueResult<Texture<Vec3>> {
    let resolution = accum.resolution();
    let texel = resolution.texel_size();
    let data = evaluate_pixels(resolution, pool, |x, y| {
        sharpen_pixel(accum, resolution.pixel_center_uv(x, y), texel)
    })?;
    Texture::new(resolution, data)
}

#[cfg(test)]
#[path = "../../tests/unit/filter/sharpen.rs"]
mod tests;
