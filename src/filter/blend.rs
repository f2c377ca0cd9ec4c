//! Blend-weight estimation and the power-curve history blend.

use crate::foundation::core::{Vec2, Vec3};
use crate::foundation::math::{DIV_EPSILON, lerp, saturate, saturate3};

/// Frame time (ms) at which blend dynamics are tuned: 48 FPS.
pub const BASELINE_FRAME_TIME_MS: f32 = 1000.0 / 48.0;

/// History weight at `strength == 0`.
pub const MIN_BASE_WEIGHT: f32 = 0.50;

/// History weight at `strength == 1`.
pub const MAX_BASE_WEIGHT: f32 = 0.99;

/// History never dominates beyond this.
pub const MAX_HISTORY_WEIGHT: f32 = 0.95;

/// Exponent of the perceptual blend domain.
pub const BLEND_POWER: f32 = 2.0;

/// Per-pixel quantities the weight estimate is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendInputs {
    /// Temporal filter strength in `[0, 1]`.
    pub strength: f32,
    /// Host frame time in milliseconds.
    pub frame_time_ms: f32,
    /// Local contrast from the neighbourhood.
    pub contrast: f32,
    /// Motion vector in UV units.
    pub motion: Vec2,
    /// Nearest linear depth in the neighbourhood.
    pub min_depth: f32,
    /// Linear depth fetched from depth history.
    pub last_depth: f32,
    /// Linear depth at the pixel.
    pub current_depth: f32,
}

/// Result of [`estimate_weights`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlendWeights {
    /// Frame time relative to the 48 FPS baseline.
    pub fps_fix: f32,
    /// Motion magnitude in UV units.
    pub speed: f32,
    /// Motion attenuation in `[0, 1]`.
    pub speed_factor: f32,
    /// Disocclusion mask in `[0, 1]`; 0 rejects history.
    pub depth_mask: f32,
    /// Final history weight in `[0, MAX_HISTORY_WEIGHT]`.
    pub weight: f32,
}

/// Frame time relative to [`BASELINE_FRAME_TIME_MS`]; unusable frame times count as baseline.
pub fn fps_fix(frame_time_ms: f32) -> f32 {
    if frame_time_ms.is_finite() && frame_time_ms > 0.0 {
        frame_time_ms / BASELINE_FRAME_TIME_MS
    } else {
        1.0
    }
}

/// Sharp fall-off disocclusion detector.
///
/// History depth meaningfully nearer than the closest current depth means the pixel was hidden
/// last frame.
pub fn depth_mask(min_depth: f32, last_depth: f32, current_depth: f32) -> f32 {
    let delta = saturate(min_depth - last_depth).max(0.0) / current_depth.max(DIV_EPSILON);
    saturate(1.0 - (4.0 * delta).powi(4))
}

/// Combine frame time, contrast, motion and disocclusion into a history weight.
pub fn estimate_weights(inp: &BlendInputs) -> BlendWeights {
    let fps_fix = fps_fix(inp.frame_time_ms);
    let speed = inp.motion.length();
    let speed_factor = 1.0 - saturate(speed * 20.0).sqrt();
    let depth_mask = depth_mask(inp.min_depth, inp.last_depth, inp.current_depth);

    // Per-frame retention compounds, so longer frames retain less.
    let base = lerp(MIN_BASE_WEIGHT, MAX_BASE_WEIGHT, saturate(inp.strength)).powf(fps_fix);
    let widened = base * (0.6 + 2.0 * inp.contrast);
    let weight = lerp(base, widened, 0.5) * speed_factor * depth_mask;

    BlendWeights {
        fps_fix,
        speed,
        speed_factor,
        depth_mask,
        weight: weight.clamp(0.0, MAX_HISTORY_WEIGHT),
    }
}

/// Blend `current` toward `history` by `weight` in the power-curve domain.
pub fn blend_color(current: Vec3, history: Vec3, weight: f32) -> Vec3 {
    let c = saturate3(current).powf(BLEND_POWER);
    let h = saturate3(history).powf(BLEND_POWER);
    saturate3(c.lerp(h, weight).powf(1.0 / BLEND_POWER))
}

/// Sharpness value carried in the accumulation alpha for the present pass.
///
/// Moving detail gets more sharpening; the value is averaged with last frame's carry so it decays
/// smoothly, then attenuated by the disocclusion mask and the user sliders.
pub fn carry_sharpness(
    contrast: f32,
    speed: f32,
    previous: f32,
    depth_mask: f32,
    sharpening: f32,
    strength: f32,
) -> f32 {
    let fresh = (0.01 + contrast) * speed.max(0.0).powf(0.3) * 32.0;
    let carried = 0.5 * (fresh + previous);
    saturate(carried * depth_mask * saturate(sharpening) * saturate(strength))
}

#[cfg(test)]
#[path = "../../tests/unit/filter/blend.rs"]
mod tests;
