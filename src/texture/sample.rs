use crate::foundation::core::Vec2;
use crate::texture::field::{Texel, Texture};

impl<T: Texel> Texture<T> {
    /// Nearest-texel fetch at UV `uv`.
    pub fn sample_point(&self, uv: Vec2) -> T {
        let p = uv * Vec2::new(self.width() as f32, self.height() as f32);
        self.load(p.x.floor() as i64, p.y.floor() as i64)
    }

    /// Bilinear fetch at UV `uv` with texel centres at `(i + 0.5) / size`.
    pub fn sample_linear(&self, uv: Vec2) -> T {
        let p = uv * Vec2::new(self.width() as f32, self.height() as f32) - Vec2::splat(0.5);
        let base = p.floor();
        let f = p - base;
        let (x0, y0) = (base.x as i64, base.y as i64);

        let top = self.load(x0, y0) * (1.0 - f.x) + self.load(x0 + 1, y0) * f.x;
        let bottom = self.load(x0, y0 + 1) * (1.0 - f.x) + self.load(x0 + 1, y0 + 1) * f.x;
        top * (1.0 - f.y) + bottom * f.y
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/sample.rs"]
mod tests;
