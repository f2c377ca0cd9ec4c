use crate::foundation::error::{AccrueError, AccrueResult};

pub use glam::{Vec2, Vec3, Vec4};

/// Monotonically increasing 0-based frame counter.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The index following this one, saturating at `u64::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Low 32 bits of the counter, as consumed by the jitter hashes.
    pub fn as_u32(self) -> u32 {
        self.0 as u32
    }
}

/// Render-target dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a validated resolution with both dimensions non-zero.
    pub fn new(width: u32, height: u32) -> AccrueResult<Self> {
        if width == 0 || height == 0 {
            return Err(AccrueError::validation(format!(
                "resolution must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels; errors when either dimension is zero or `width * height` overflows.
    ///
    /// The fields are public, so storage built from a `Resolution` re-checks it here.
    pub fn pixel_count(self) -> AccrueResult<usize> {
        if self.width == 0 || self.height == 0 {
            return Err(AccrueError::validation(format!(
                "resolution must be non-zero, got {self}"
            )));
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or_else(|| AccrueError::validation("resolution pixel count overflow"))
    }

    /// Size of one texel in UV units.
    pub fn texel_size(self) -> Vec2 {
        Vec2::new(1.0 / self.width as f32, 1.0 / self.height as f32)
    }

    /// UV coordinate of the centre of pixel `(x, y)`.
    pub fn pixel_center_uv(self, x: u32, y: u32) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) / self.width as f32,
            (y as f32 + 0.5) / self.height as f32,
        )
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
