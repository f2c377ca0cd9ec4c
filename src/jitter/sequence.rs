//! Per-pixel, per-frame sub-pixel offsets.
//!
//! Every pattern is a pure function of `(x, y, frame)`. The filter relies on this to reconstruct
//! the offset a frame was captured with instead of storing it.

use crate::foundation::core::{FrameIndex, Resolution, Vec2};
use crate::foundation::math::{frac, pcg_hash, unit_from_u32};
use crate::jitter::pattern::JitterPattern;
use std::f32::consts::TAU;

/// Digit budget of the Halton radical inverse.
pub const HALTON_MAX_DIGITS: u32 = 8;

/// Sobol pattern period in frames.
pub const SOBOL_PERIOD: u64 = 1024;

const LARGEST_BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Unit-radius Poisson-disk sample table.
pub const POISSON_DISK_32: [[f32; 2]; 32] = [
    [-0.975_402, -0.071_138_6],
    [-0.920_347, -0.411_42],
    [-0.883_908, 0.217_872],
    [-0.884_518, 0.568_041],
    [-0.811_945, 0.905_21],
    [-0.792_474, -0.779_962],
    [-0.614_856, 0.386_578],
    [-0.580_859, -0.208_777],
    [-0.537_95, 0.716_666],
    [-0.515_427, 0.089_999_1],
    [-0.454_634, -0.707_938],
    [-0.420_942, 0.991_272],
    [-0.261_147, 0.588_488],
    [-0.211_219, 0.114_841],
    [-0.146_336, -0.259_194],
    [-0.139_439, -0.888_668],
    [0.011_688_6, 0.326_395],
    [0.038_056_6, 0.625_477],
    [0.062_593_5, -0.508_53],
    [0.125_584, 0.046_906_9],
    [0.169_469, -0.997_253],
    [0.320_597, 0.291_055],
    [0.359_172, -0.633_717],
    [0.435_713, -0.250_832],
    [0.507_797, -0.916_562],
    [0.545_763, 0.730_216],
    [0.568_59, 0.116_55],
    [0.743_156, -0.505_173],
    [0.736_442, -0.189_734],
    [0.843_562, 0.357_036],
    [0.865_413, -0.763_726],
    [0.872_093, 0.084_771_9],
];

/// Radical inverse of `index` in `base`, bounded to [`HALTON_MAX_DIGITS`] digits.
///
/// Returns a value in `[0, 1)`; `halton(0, b) == 0` for every base. Bases below 2 have no digit
/// expansion and yield 0.
pub fn halton(index: u32, base: u32) -> f32 {
    if base < 2 {
        return 0.0;
    }
    let inv = 1.0 / base as f32;
    let mut i = index;
    let mut f = inv;
    let mut r = 0.0f32;
    for _ in 0..HALTON_MAX_DIGITS {
        if i == 0 {
            break;
        }
        r += f * (i % base) as f32;
        i /= base;
        f *= inv;
    }
    r.min(LARGEST_BELOW_ONE)
}

/// Second Sobol dimension for `index`, XOR-scrambled by `scramble`, mapped into `[0, 1)`.
pub fn sobol(index: u32, scramble: u32) -> f32 {
    let mut r = scramble;
    let mut v = 1u32 << 31;
    let mut i = index;
    while i != 0 {
        if i & 1 != 0 {
            r ^= v;
        }
        i >>= 1;
        v ^= v >> 1;
    }
    unit_from_u32(r)
}

/// Sine-hash white noise in `[0, 1)`.
pub fn sine_hash(n: u32) -> f32 {
    (frac((f64::from(n) * 12.9898).sin() * 43_758.545_3) as f32).min(LARGEST_BELOW_ONE)
}

fn grid_offset(_x: u32, _y: u32, _frame: FrameIndex) -> Vec2 {
    Vec2::ZERO
}

fn random_offset(x: u32, y: u32, frame: FrameIndex) -> Vec2 {
    let r = sine_hash((x ^ y).wrapping_add(frame.as_u32()));
    Vec2::new(r, 1.0 - r)
}

fn halton_offset(x: u32, y: u32, frame: FrameIndex) -> Vec2 {
    let i = (x ^ y).wrapping_add(frame.as_u32());
    Vec2::new(halton(i, 2), halton(i, 3))
}

fn poisson_offset(x: u32, y: u32, frame: FrameIndex) -> Vec2 {
    let seed = x
        .wrapping_mul(16_807)
        .wrapping_add(y.wrapping_mul(331))
        .wrapping_add(frame.as_u32().wrapping_mul(1_122_334_455));
    let h = pcg_hash(seed);
    let [px, py] = POISSON_DISK_32[(h % 32) as usize];
    let angle = unit_from_u32(pcg_hash(h)) * TAU;
    Vec2::from_angle(angle).rotate(Vec2::new(px, py))
}

fn sobol_offset(x: u32, y: u32, frame: FrameIndex) -> Vec2 {
    let index = (frame.0 % SOBOL_PERIOD) as u32;
    let v = sobol(index, ((x ^ y) | 1).reverse_bits());
    Vec2::new(v, 1.0 - v)
}

type OffsetFn = fn(u32, u32, FrameIndex) -> Vec2;

/// Jitter generator with its pattern resolved once up front.
#[derive(Clone, Copy, Debug)]
pub struct Jitter {
    pattern: JitterPattern,
    scale: Vec2,
    offset_fn: OffsetFn,
}

impl Jitter {
    /// Build a generator for `pattern`, scaling offsets by `strength` texels of `resolution`.
    pub fn new(pattern: JitterPattern, strength: f32, resolution: Resolution) -> Self {
        let offset_fn: OffsetFn = match pattern {
            JitterPattern::Grid => grid_offset,
            JitterPattern::Random => random_offset,
            JitterPattern::Halton => halton_offset,
            JitterPattern::PoissonDisk => poisson_offset,
            JitterPattern::Sobol => sobol_offset,
        };
        Self {
            pattern,
            scale: resolution.texel_size() * strength,
            offset_fn,
        }
    }

    /// Pattern this generator was built for.
    pub fn pattern(&self) -> JitterPattern {
        self.pattern
    }

    /// Unscaled pattern value for pixel `(x, y)` at `frame`.
    pub fn raw(&self, x: u32, y: u32, frame: FrameIndex) -> Vec2 {
        (self.offset_fn)(x, y, frame)
    }

    /// UV-space offset for pixel `(x, y)` at `frame`.
    pub fn offset(&self, x: u32, y: u32, frame: FrameIndex) -> Vec2 {
        self.raw(x, y, frame) * self.scale
    }

    /// UV-space offsets for pixel `(x, y)` over `count` frames starting at `start`.
    pub fn offsets(&self, x: u32, y: u32, start: FrameIndex, count: u64) -> Vec<Vec2> {
        (0..count)
            .map(|i| self.offset(x, y, FrameIndex(start.0.saturating_add(i))))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/jitter/sequence.rs"]
mod tests;
