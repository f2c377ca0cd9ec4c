use crate::foundation::core::{Resolution, Vec4};
use crate::foundation::error::AccrueResult;
use crate::texture::field::Texture;

/// One generation of history: accumulated colour with carried sharpness, plus linear depth.
#[derive(Clone, Debug, PartialEq)]
pub struct HistorySlot {
    /// RGB accumulation; alpha holds carried sharpness.
    pub color: Texture<Vec4>,
    /// Linear depth captured alongside the accumulation.
    pub depth: Texture<f32>,
}

impl HistorySlot {
    fn cleared(resolution: Resolution) -> AccrueResult<Self> {
        Ok(Self {
            color: Texture::filled(resolution, Vec4::ZERO)?,
            depth: Texture::filled(resolution, 0.0)?,
        })
    }
}

/// Double-buffered history with an explicit active index.
///
/// `slots[active]` is what the last commit wrote and what the next resolve reads. A commit
/// writes the other slot and then flips `active`, so the generation being read is never the one
/// being written.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryBuffer {
    slots: [HistorySlot; 2],
    active: usize,
}

impl HistoryBuffer {
    /// Zeroed history at `resolution`.
    pub fn new(resolution: Resolution) -> AccrueResult<Self> {
        tracing::debug!(%resolution, "allocating history");
        Ok(Self {
            slots: [
                HistorySlot::cleared(resolution)?,
                HistorySlot::cleared(resolution)?,
            ],
            active: 0,
        })
    }

    /// Resolution of both slots.
    pub fn resolution(&self) -> Resolution {
        self.slots[0].color.resolution()
    }

    /// Index of the slot holding the previous frame's history.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// History produced by the last commit.
    pub fn previous(&self) -> &HistorySlot {
        &self.slots[self.active]
    }

    /// Slot the next commit will overwrite.
    pub fn write_slot(&mut self) -> &mut HistorySlot {
        &mut self.slots[1 - self.active]
    }

    /// Replace the write slot with this frame's results and make it the previous generation.
    pub fn commit(&mut self, color: Texture<Vec4>, depth: Texture<f32>) -> AccrueResult<()> {
        let resolution = self.resolution();
        color.ensure_resolution(resolution, "history color")?;
        depth.ensure_resolution(resolution, "history depth")?;
        let slot = self.write_slot();
        slot.color = color;
        slot.depth = depth;
        self.active = 1 - self.active;
        Ok(())
    }

    /// Zero both slots and return to slot 0.
    pub fn reset(&mut self) {
        tracing::debug!("resetting history");
        for slot in &mut self.slots {
            slot.color.fill(Vec4::ZERO);
            slot.depth.fill(0.0);
        }
        self.active = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/history.rs"]
mod tests;
