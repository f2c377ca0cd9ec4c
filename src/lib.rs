//! accrue is a temporal accumulation filter for real-time rendered frames.
//!
//! Each displayed frame is captured with a sub-pixel jitter, blended into an exponentially
//! accumulated history that follows the motion vectors, and presented through a
//! contrast-adaptive sharpen. The API is session-oriented:
//!
//! - Build a [`FilterConfig`] (or load one from JSON)
//! - Create a [`TemporalFilter`] for the render-target [`Resolution`]
//! - Hand it one [`FrameInputs`] per frame and present [`FilterOutput::color`]
//!
//! The individual passes are exported as plain functions for hosts that schedule them
//! themselves.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod color;
pub(crate) mod filter;
pub(crate) mod io;
pub(crate) mod jitter;
pub(crate) mod pipeline;
pub(crate) mod texture;

pub use crate::foundation::core::{FrameIndex, Resolution, Vec2, Vec3, Vec4};
pub use crate::foundation::error::{AccrueError, AccrueResult};

pub use crate::color::space::{luma, rgb_to_ycbcr, ycbcr_to_rgb};
pub use crate::filter::blend::{
    BASELINE_FRAME_TIME_MS, BLEND_POWER, BlendInputs, BlendWeights, MAX_BASE_WEIGHT,
    MAX_HISTORY_WEIGHT, MIN_BASE_WEIGHT, blend_color, carry_sharpness, depth_mask,
    estimate_weights, fps_fix,
};
pub use crate::filter::neighborhood::{
    DIAGONAL_SCALE, NEIGHBORHOOD_OFFSETS, Neighborhood, analyze_neighborhood,
};
pub use crate::filter::reproject::{
    Reprojection, clip_to_neighborhood, clip_ycbcr, reproject, sample_bicubic5,
};
pub use crate::filter::sharpen::{SHARPEN_CONTRAST, cross_weight, sharpen, sharpen_pixel};
pub use crate::io::image::{
    decode_color, decode_depth, load_color, load_depth, rgb8_from_texture, save_rgb8,
    texture_from_rgb8,
};
pub use crate::jitter::pattern::JitterPattern;
pub use crate::jitter::sequence::{
    HALTON_MAX_DIGITS, Jitter, POISSON_DISK_32, SOBOL_PERIOD, halton, sine_hash, sobol,
};
pub use crate::pipeline::config::{DebugView, DepthConfig, FilterConfig, FilterOpts};
pub use crate::pipeline::frame::{FrameInputs, linearize_depth};
pub use crate::pipeline::history::{HistoryBuffer, HistorySlot};
pub use crate::pipeline::session::{
    DISOCCLUSION_THRESHOLD, FilterOutput, FrameStats, TemporalFilter,
};
pub use crate::texture::field::{Texel, Texture};
