use crate::color::space::rgb_to_ycbcr;
use crate::foundation::core::{Vec2, Vec4};
use crate::foundation::math::saturate;
use crate::texture::field::Texture;

/// Diagonal taps are pulled in so all eight neighbours sit at roughly equal radius.
pub const DIAGONAL_SCALE: f32 = 0.7;

/// Stencil offsets in texels: centre first, then the cross, then the diagonals.
pub const NEIGHBORHOOD_OFFSETS: [Vec2; 9] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(-DIAGONAL_SCALE, -DIAGONAL_SCALE),
    Vec2::new(DIAGONAL_SCALE, -DIAGONAL_SCALE),
    Vec2::new(-DIAGONAL_SCALE, DIAGONAL_SCALE),
    Vec2::new(DIAGONAL_SCALE, DIAGONAL_SCALE),
];

/// Local bounds of the captured frame around one pixel.
///
/// `min`/`max` hold `(Y, Cb, Cr, linear depth)`; `center` holds `(R, G, B, linear depth)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighborhood {
    /// Centre sample in RGB plus depth.
    pub center: Vec4,
    /// Componentwise minimum in transformed space plus depth.
    pub min: Vec4,
    /// Componentwise maximum in transformed space plus depth.
    pub max: Vec4,
    /// Perceptually compressed luma spread in `[0, 1]`.
    pub contrast: f32,
}

/// Sample the 9-tap stencil of `current` around `uv`.
pub fn analyze_neighborhood(current: &Texture<Vec4>, uv: Vec2, texel: Vec2) -> Neighborhood {
    let center = current.sample_linear(uv);
    let mut min = Vec4::splat(f32::INFINITY);
    let mut max = Vec4::splat(f32::NEG_INFINITY);

    for (i, off) in NEIGHBORHOOD_OFFSETS.iter().enumerate() {
        let s = if i == 0 {
            center
        } else {
            current.sample_linear(uv + *off * texel)
        };
        let t = rgb_to_ycbcr(s.truncate()).extend(s.w);
        min = min.min(t);
        max = max.max(t);
    }

    let contrast = saturate((max.x - min.x).abs().powf(0.75));
    Neighborhood {
        center,
        min,
        max,
        contrast,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/neighborhood.rs"]
mod tests;
