//! Per-frame driver: capture, resolve, commit, present.

use crate::filter::blend::{
    BlendInputs, BlendWeights, blend_color, carry_sharpness, estimate_weights,
};
use crate::filter::neighborhood::analyze_neighborhood;
use crate::filter::reproject::reproject;
use crate::filter::sharpen::sharpen;
use crate::foundation::core::{FrameIndex, Resolution, Vec2, Vec3, Vec4};
use crate::foundation::error::{AccrueError, AccrueResult};
use crate::foundation::math::saturate3;
use crate::jitter::sequence::Jitter;
use crate::pipeline::config::{DebugView, FilterConfig, FilterOpts};
use crate::pipeline::frame::{FrameInputs, linearize_depth};
use crate::pipeline::history::HistoryBuffer;
use crate::texture::field::{Texture, evaluate_pixels};

/// Depth mask below which a pixel counts as disoccluded in [`FrameStats`].
pub const DISOCCLUSION_THRESHOLD: f32 = 0.5;

/// Aggregates over one resolve pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameStats {
    /// Frame these stats describe.
    pub frame: FrameIndex,
    /// Mean history weight.
    pub mean_weight: f32,
    /// Mean disocclusion mask.
    pub mean_depth_mask: f32,
    /// Pixels whose depth mask fell below [`DISOCCLUSION_THRESHOLD`].
    pub disoccluded: usize,
    /// Mean carried sharpness.
    pub mean_sharpness: f32,
}

/// Result of [`TemporalFilter::process`].
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOutput {
    /// Colour to present.
    pub color: Texture<Vec3>,
    /// Jitter (UV units) the host applies when rendering the next frame, at the centre pixel.
    pub next_jitter: Vec2,
    /// Resolve-pass aggregates.
    pub stats: FrameStats,
}

#[derive(Clone, Copy, Debug, Default)]
struct ResolvedPixel {
    accum: Vec4,
    weights: BlendWeights,
    contrast: f32,
    motion: Vec2,
}

/// Temporal accumulation filter with its history.
///
/// One instance per render target. [`TemporalFilter::process`] is called once per displayed
/// frame, in order.
#[derive(Debug)]
pub struct TemporalFilter {
    config: FilterConfig,
    opts: FilterOpts,
    jitter: Jitter,
    history: HistoryBuffer,
    frame: FrameIndex,
    pool: Option<rayon::ThreadPool>,
}

impl TemporalFilter {
    /// Filter for `resolution` with zeroed history, starting at frame 0.
    pub fn new(
        resolution: Resolution,
        config: FilterConfig,
        opts: FilterOpts,
    ) -> AccrueResult<Self> {
        config.validate()?;
        let config = config.clamped();
        let history = HistoryBuffer::new(resolution)?;
        let pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            validate_threads(opts.threads)?;
            None
        };
        Ok(Self {
            jitter: Jitter::new(config.pattern, config.jitter_strength, resolution),
            history,
            frame: FrameIndex::default(),
            config,
            opts,
            pool,
        })
    }

    /// Active configuration, sliders already clamped.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Execution options this filter was built with.
    pub fn opts(&self) -> FilterOpts {
        self.opts
    }

    /// Swap in a new configuration; history is kept.
    pub fn set_config(&mut self, config: FilterConfig) -> AccrueResult<()> {
        config.validate()?;
        self.config = config.clamped();
        self.jitter = Jitter::new(
            self.config.pattern,
            self.config.jitter_strength,
            self.resolution(),
        );
        Ok(())
    }

    /// Render-target resolution.
    pub fn resolution(&self) -> Resolution {
        self.history.resolution()
    }

    /// Index of the next frame to be processed.
    pub fn frame_index(&self) -> FrameIndex {
        self.frame
    }

    /// Follow the host's frame counter instead of the internal one.
    pub fn set_frame_index(&mut self, frame: FrameIndex) {
        self.frame = frame;
    }

    /// History carried into the next frame.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Jitter generator for the current config and resolution.
    pub fn jitter(&self) -> &Jitter {
        &self.jitter
    }

    /// Jitter (UV units) the host applies to pixel `(x, y)` when rendering the next frame.
    pub fn next_jitter(&self, x: u32, y: u32) -> Vec2 {
        self.jitter.offset(x, y, self.frame)
    }

    /// Drop all history and restart at frame 0.
    pub fn reset(&mut self) {
        self.history.reset();
        self.frame = FrameIndex::default();
    }

    /// Reallocate zeroed history at a new resolution; the frame counter keeps running.
    pub fn resize(&mut self, width: u32, height: u32) -> AccrueResult<()> {
        let resolution = Resolution::new(width, height)?;
        tracing::debug!(from = %self.resolution(), to = %resolution, "resizing filter");
        self.history = HistoryBuffer::new(resolution)?;
        self.jitter = Jitter::new(self.config.pattern, self.config.jitter_strength, resolution);
        Ok(())
    }

    /// Filter one frame and advance the frame counter.
    #[tracing::instrument(skip(self, inputs), fields(frame = self.frame.0))]
    pub fn process(&mut self, inputs: &FrameInputs) -> AccrueResult<FilterOutput> {
        let resolution = self.resolution();
        if inputs.resolution() != resolution {
            return Err(AccrueError::validation(format!(
                "frame is {}, filter expects {resolution}; call resize first",
                inputs.resolution()
            )));
        }
        inputs.depth.ensure_resolution(resolution, "depth")?;
        inputs.motion.ensure_resolution(resolution, "motion")?;

        let capture = self.capture(inputs)?;
        let resolved = self.resolve(&capture, inputs)?;
        let stats = self.frame_stats(&resolved);

        let accum = Texture::new(resolution, resolved.iter().map(|p| p.accum).collect())?;
        self.history.commit(accum, capture.map(|c| c.w))?;

        let color = self.present(&resolved)?;

        tracing::debug!(
            mean_weight = stats.mean_weight,
            mean_depth_mask = stats.mean_depth_mask,
            disoccluded = stats.disoccluded,
            "frame resolved"
        );

        self.frame = self.frame.next();
        Ok(FilterOutput {
            color,
            next_jitter: self.next_jitter(resolution.width / 2, resolution.height / 2),
            stats,
        })
    }

    fn capture(&self, inputs: &FrameInputs) -> AccrueResult<Texture<Vec4>> {
        let resolution = self.resolution();
        let depth_cfg = self.config.depth;
        let data = evaluate_pixels(resolution, self.pool.as_ref(), |x, y| {
            let uv = resolution.pixel_center_uv(x, y) + self.jitter.offset(x, y, self.frame);
            let rgb = inputs.color.sample_linear(uv);
            let depth = linearize_depth(inputs.depth.sample_point(uv), &depth_cfg);
            rgb.extend(depth)
        })?;
        Texture::new(resolution, data)
    }

    fn resolve(
        &self,
        capture: &Texture<Vec4>,
        inputs: &FrameInputs,
    ) -> AccrueResult<Vec<ResolvedPixel>> {
        let resolution = self.resolution();
        let texel = resolution.texel_size();
        let prev = self.history.previous();
        let cfg = &self.config;

        // The capture already holds the jittered samples, so its texel centres are read as-is.
        evaluate_pixels(resolution, self.pool.as_ref(), |x, y| {
            let uv = resolution.pixel_center_uv(x, y);
            let nb = analyze_neighborhood(capture, uv, texel);
            let rp = reproject(&prev.color, &prev.depth, &inputs.motion, uv, &nb);
            let weights = estimate_weights(&BlendInputs {
                strength: cfg.strength,
                frame_time_ms: inputs.frame_time_ms,
                contrast: nb.contrast,
                motion: rp.motion,
                min_depth: nb.min.w,
                last_depth: rp.last_depth,
                current_depth: nb.center.w,
            });
            let color = blend_color(nb.center.truncate(), rp.clipped, weights.weight);
            let sharpness = carry_sharpness(
                nb.contrast,
                weights.speed,
                rp.history.w,
                weights.depth_mask,
                cfg.sharpening,
                cfg.strength,
            );
            ResolvedPixel {
                accum: color.extend(sharpness),
                weights,
                contrast: nb.contrast,
                motion: rp.motion,
            }
        })
    }

    fn present(&self, resolved: &[ResolvedPixel]) -> AccrueResult<Texture<Vec3>> {
        let resolution = self.resolution();
        match self.config.debug_view {
            DebugView::None => sharpen(&self.history.previous().color, self.pool.as_ref()),
            view => {
                let pixels_per_uv = Vec2::new(resolution.width as f32, resolution.height as f32);
                let data = resolved
                    .iter()
                    .map(|p| debug_color(view, p, pixels_per_uv))
                    .collect();
                Texture::new(resolution, data)
            }
        }
    }

    fn frame_stats(&self, resolved: &[ResolvedPixel]) -> FrameStats {
        let n = resolved.len().max(1) as f64;
        let mut weight = 0.0f64;
        let mut mask = 0.0f64;
        let mut sharpness = 0.0f64;
        let mut disoccluded = 0usize;
        for p in resolved {
            weight += f64::from(p.weights.weight);
            mask += f64::from(p.weights.depth_mask);
            sharpness += f64::from(p.accum.w);
            if p.weights.depth_mask < DISOCCLUSION_THRESHOLD {
                disoccluded += 1;
            }
        }
        FrameStats {
            frame: self.frame,
            mean_weight: (weight / n) as f32,
            mean_depth_mask: (mask / n) as f32,
            disoccluded,
            mean_sharpness: (sharpness / n) as f32,
        }
    }
}

fn debug_color(view: DebugView, p: &ResolvedPixel, pixels_per_uv: Vec2) -> Vec3 {
    match view {
        DebugView::None => p.accum.truncate(),
        DebugView::BlendWeight => Vec3::splat(p.weights.weight),
        DebugView::DepthMask => Vec3::splat(p.weights.depth_mask),
        DebugView::Sharpness => Vec3::splat(p.accum.w),
        DebugView::Contrast => Vec3::splat(p.contrast),
        // +-8 px of motion spans the full red/green range.
        DebugView::Motion => {
            let m = p.motion * pixels_per_uv / 16.0;
            saturate3(Vec3::new(0.5 + m.x, 0.5 + m.y, 0.5))
        }
    }
}

fn validate_threads(threads: Option<usize>) -> AccrueResult<()> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AccrueError::validation(
            "filter threading 'threads' must be >= 1 when set",
        ));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> AccrueResult<rayon::ThreadPool> {
    validate_threads(threads)?;
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/session.rs"]
mod tests;
