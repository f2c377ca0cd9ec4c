use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::error::{AccrueError, AccrueResult};
use crate::foundation::math::saturate;
use crate::jitter::pattern::JitterPattern;

/// How raw depth is mapped to linear `[0, 1]` depth.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthConfig {
    /// Far plane distance; the near plane is fixed at 1.
    pub far_plane: f32,
    /// Scale applied to raw depth before linearization.
    pub multiplier: f32,
    /// Raw depth uses the reversed convention (1 = near).
    pub reversed: bool,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            far_plane: 1000.0,
            multiplier: 1.0,
            reversed: false,
        }
    }
}

/// Replacement for the presented colour, for inspecting the resolve pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebugView {
    /// Present the sharpened accumulation.
    #[default]
    None,
    /// History weight as grayscale.
    BlendWeight,
    /// Disocclusion mask as grayscale; black marks rejected history.
    DepthMask,
    /// Carried sharpness as grayscale.
    Sharpness,
    /// Motion vector as red/green around mid gray.
    Motion,
    /// Local contrast as grayscale.
    Contrast,
}

/// User-tunable filter parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Temporal filter strength in `[0, 1]`; higher keeps more history.
    pub strength: f32,
    /// Final sharpening strength in `[0, 1]`.
    pub sharpening: f32,
    /// Jitter amplitude in pixels, `[0, 1]`.
    pub jitter_strength: f32,
    /// Sub-pixel jitter strategy.
    pub pattern: JitterPattern,
    /// Depth linearization.
    pub depth: DepthConfig,
    /// Debug visualization of the presented output.
    pub debug_view: DebugView,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            strength: 0.5,
            sharpening: 0.5,
            jitter_strength: 1.0,
            pattern: JitterPattern::default(),
            depth: DepthConfig::default(),
            debug_view: DebugView::default(),
        }
    }
}

impl FilterConfig {
    /// Parse a JSON config.
    pub fn from_reader(reader: impl std::io::Read) -> AccrueResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| AccrueError::serde(format!("parse filter config JSON: {e}")))
    }

    /// Parse a JSON config file.
    pub fn from_path(path: &Path) -> AccrueResult<Self> {
        let f = File::open(path)
            .map_err(|e| AccrueError::io(format!("open filter config '{}': {e}", path.display())))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values no amount of clamping can repair.
    pub fn validate(&self) -> AccrueResult<()> {
        for (name, v) in [
            ("strength", self.strength),
            ("sharpening", self.sharpening),
            ("jitter_strength", self.jitter_strength),
            ("depth.far_plane", self.depth.far_plane),
            ("depth.multiplier", self.depth.multiplier),
        ] {
            if !v.is_finite() {
                return Err(AccrueError::validation(format!(
                    "{name} must be finite, got {v}"
                )));
            }
        }
        if self.depth.far_plane <= 1.0 {
            return Err(AccrueError::validation(format!(
                "depth.far_plane must be > 1 (near plane), got {}",
                self.depth.far_plane
            )));
        }
        Ok(())
    }

    /// Copy with the sliders clamped into `[0, 1]`.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for (name, slot) in [
            ("strength", &mut out.strength),
            ("sharpening", &mut out.sharpening),
            ("jitter_strength", &mut out.jitter_strength),
        ] {
            let v = saturate(*slot);
            if v != *slot {
                tracing::warn!(
                    param = name,
                    value = *slot,
                    clamped = v,
                    "filter parameter out of range"
                );
                *slot = v;
            }
        }
        out
    }
}

/// Runtime execution options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterOpts {
    /// Run the per-pixel passes on a rayon thread pool.
    pub parallel: bool,
    /// Worker count for the pool; `None` picks rayon's default.
    pub threads: Option<usize>,
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
