use crate::foundation::core::Resolution;
use crate::foundation::error::{AccrueError, AccrueResult};
use rayon::prelude::*;
use std::ops::{Add, Mul};

/// Value type storable in a [`Texture`] and interpolable by the samplers.
pub trait Texel:
    Copy + Default + Send + Sync + Add<Output = Self> + Mul<f32, Output = Self> + 'static
{
}

impl<T> Texel for T where
    T: Copy + Default + Send + Sync + Add<Output = T> + Mul<f32, Output = T> + 'static
{
}

/// Row-major 2D field of texels with clamp-to-edge addressing.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture<T> {
    resolution: Resolution,
    data: Vec<T>,
}

impl<T: Texel> Texture<T> {
    /// Wrap `data`, which must hold exactly `width * height` texels.
    pub fn new(resolution: Resolution, data: Vec<T>) -> AccrueResult<Self> {
        let expected = resolution.pixel_count()?;
        if data.len() != expected {
            return Err(AccrueError::validation(format!(
                "texture data has {} texels, expected {expected} for {resolution}",
                data.len()
            )));
        }
        Ok(Self { resolution, data })
    }

    /// Texture with every texel set to `value`.
    pub fn filled(resolution: Resolution, value: T) -> AccrueResult<Self> {
        let n = resolution.pixel_count()?;
        Ok(Self {
            resolution,
            data: vec![value; n],
        })
    }

    /// Texture built by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(resolution: Resolution, f: impl Fn(u32, u32) -> T) -> AccrueResult<Self> {
        let mut data = Vec::with_capacity(resolution.pixel_count()?);
        for y in 0..resolution.height {
            for x in 0..resolution.width {
                data.push(f(x, y));
            }
        }
        Ok(Self { resolution, data })
    }

    /// Same as [`Texture::from_fn`], evaluating rows on `pool`.
    pub fn from_fn_par(
        resolution: Resolution,
        pool: &rayon::ThreadPool,
        f: impl Fn(u32, u32) -> T + Sync,
    ) -> AccrueResult<Self> {
        let data = evaluate_pixels(resolution, Some(pool), f)?;
        Ok(Self { resolution, data })
    }

    /// Dimensions of the field.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    /// Texels in row-major order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable texels in row-major order.
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the texture and return its texels.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Fetch the texel at integer coordinates, clamped to the edge.
    pub fn load(&self, x: i64, y: i64) -> T {
        let xi = x.clamp(0, i64::from(self.resolution.width) - 1) as usize;
        let yi = y.clamp(0, i64::from(self.resolution.height) - 1) as usize;
        self.data[yi * self.resolution.width as usize + xi]
    }

    /// Overwrite every texel with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Apply `f` to every texel, producing a texture of the same size.
    pub fn map<U: Texel>(&self, f: impl Fn(T) -> U) -> Texture<U> {
        Texture {
            resolution: self.resolution,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Error unless this texture has resolution `expected`.
    pub fn ensure_resolution(&self, expected: Resolution, what: &str) -> AccrueResult<()> {
        if self.resolution != expected {
            return Err(AccrueError::validation(format!(
                "{what} is {}, expected {expected}",
                self.resolution
            )));
        }
        Ok(())
    }
}

/// Evaluate `f(x, y)` for every pixel in row-major order.
///
/// Rows are split across `pool` when one is given. Each pixel is computed independently, so the
/// output does not depend on the pool.
pub(crate) fn evaluate_pixels<P, F>(
    resolution: Resolution,
    pool: Option<&rayon::ThreadPool>,
    f: F,
) -> AccrueResult<Vec<P>>
where
    P: Copy + Default + Send,
    F: Fn(u32, u32) -> P + Sync,
{
    let mut data = vec![P::default(); resolution.pixel_count()?];
    let width = resolution.width as usize;
    let fill_row = |(y, row): (usize, &mut [P])| {
        for (x, px) in row.iter_mut().enumerate() {
            *px = f(x as u32, y as u32);
        }
    };
    match pool {
        Some(pool) => pool.install(|| data.par_chunks_mut(width).enumerate().for_each(fill_row)),
        None => data.chunks_mut(width).enumerate().for_each(fill_row),
    }
    Ok(data)
}

#[cfg(test)]
#[path = "../../tests/unit/texture/field.rs"]
mod tests;
