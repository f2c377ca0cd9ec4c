use glam::Vec3;

/// Denominator floor used where a ratio would otherwise divide by zero.
pub(crate) const DIV_EPSILON: f32 = 1e-6;

pub(crate) fn saturate(x: f32) -> f32 {
    // `f32::clamp` propagates NaN; treat it as black instead.
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

pub(crate) fn saturate3(v: Vec3) -> Vec3 {
    Vec3::new(saturate(v.x), saturate(v.y), saturate(v.z))
}

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Shader-style fractional part: always in `[0, 1)`, also for negative input.
pub(crate) fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// PCG-style 32-bit integer hash.
pub(crate) fn pcg_hash(input: u32) -> u32 {
    let state = input
        .wrapping_mul(747_796_405)
        .wrapping_add(2_891_336_453);
    let word = ((state >> ((state >> 28) + 4)) ^ state).wrapping_mul(277_803_737);
    (word >> 22) ^ word
}

/// Map the high 24 bits of `v` into `[0, 1)` without rounding up to 1.0.
pub(crate) fn unit_from_u32(v: u32) -> f32 {
    (v >> 8) as f32 / (1u32 << 24) as f32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
