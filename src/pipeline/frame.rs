use crate::foundation::core::{Resolution, Vec2, Vec3};
use crate::foundation::error::{AccrueError, AccrueResult};
use crate::foundation::math::saturate;
use crate::pipeline::config::DepthConfig;
use crate::texture::field::Texture;

/// Everything the host hands over for one displayed frame.
///
/// Colour is RGB, depth is raw (pre-linearization) and motion is in UV units pointing from the
/// current position to the previous one.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameInputs {
    /// Rendered colour.
    pub color: Texture<Vec3>,
    /// Raw depth as written by the renderer.
    pub depth: Texture<f32>,
    /// Per-pixel motion in UV units.
    pub motion: Texture<Vec2>,
    /// Host frame time in milliseconds.
    pub frame_time_ms: f32,
}

impl FrameInputs {
    /// Bundle the per-frame buffers, checking they share one resolution.
    pub fn new(
        color: Texture<Vec3>,
        depth: Texture<f32>,
        motion: Texture<Vec2>,
        frame_time_ms: f32,
    ) -> AccrueResult<Self> {
        let resolution = color.resolution();
        depth.ensure_resolution(resolution, "depth")?;
        motion.ensure_resolution(resolution, "motion")?;
        if !frame_time_ms.is_finite() || frame_time_ms < 0.0 {
            return Err(AccrueError::validation(format!(
                "frame_time_ms must be finite and >= 0, got {frame_time_ms}"
            )));
        }
        Ok(Self {
            color,
            depth,
            motion,
            frame_time_ms,
        })
    }

    /// Frame with zero motion and constant raw depth.
    pub fn still(color: Texture<Vec3>, raw_depth: f32, frame_time_ms: f32) -> AccrueResult<Self> {
        let resolution = color.resolution();
        Self::new(
            color,
            Texture::filled(resolution, raw_depth)?,
            Texture::filled(resolution, Vec2::ZERO)?,
            frame_time_ms,
        )
    }

    /// Shared resolution of the buffers.
    pub fn resolution(&self) -> Resolution {
        self.color.resolution()
    }
}

/// Map raw depth to linear `[0, 1]` depth with the near plane at 1.
pub fn linearize_depth(raw: f32, cfg: &DepthConfig) -> f32 {
    let mut d = raw * cfg.multiplier;
    if cfg.reversed {
        d = 1.0 - d;
    }
    let far = cfg.far_plane;
    saturate(d / (far - d * (far - 1.0)))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/frame.rs"]
mod tests;
