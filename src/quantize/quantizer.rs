use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::media::frame::Frame;
use crate::quantize::palette::{QuantKey, quant_step};

/// One non-black grid cell: its quantized key and top-left pixel coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSample {
    /// Quantized color of the sampled pixel.
    pub key: QuantKey,
    /// Cell x coordinate in pixels (a multiple of the grid step).
    pub x: u32,
    /// Cell y coordinate in pixels (a multiple of the grid step).
    pub y: u32,
}

/// Reusable output buffer of one quantization pass.
///
/// Filled by [`FrameQuantizer::quantize_into`]; iterating does not consume it, so the same pass
/// can be walked any number of times.
#[derive(Clone, Debug, Default)]
pub struct GridSamples {
    samples: Vec<GridSample>,
}

impl GridSamples {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate the samples of the last pass.
    pub fn iter(&self) -> std::slice::Iter<'_, GridSample> {
        self.samples.iter()
    }

    /// Number of emitted (non-black) cells.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` when every sampled cell was black.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrow the samples as a slice.
    pub fn as_slice(&self) -> &[GridSample] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a GridSamples {
    type Item = &'a GridSample;
    type IntoIter = std::slice::Iter<'a, GridSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Samples a frame on a regular grid and maps each sample to its palette key.
#[derive(Clone, Debug)]
pub struct FrameQuantizer {
    grid_step: u32,
    step: u32,
    // channel byte -> bucket, clamped to `levels - 1`
    level_of: [u8; 256],
}

impl FrameQuantizer {
    /// Create a quantizer for cells of `grid_step` pixels and `levels` buckets per channel.
    pub fn new(grid_step: u32, levels: u32) -> PixelatorResult<Self> {
        if grid_step == 0 {
            return Err(PixelatorError::config("grid_step must be >= 1"));
        }
        let step = quant_step(levels)?;

        let max_level = levels - 1;
        let mut level_of = [0u8; 256];
        for (v, slot) in level_of.iter_mut().enumerate() {
            // For L not a power of two, 255 / S can reach L; clamp to keep keys in the palette.
            *slot = (v as u32 / step).min(max_level) as u8;
        }

        Ok(Self {
            grid_step,
            step,
            level_of,
        })
    }

    /// Cell size in pixels.
    pub fn grid_step(&self) -> u32 {
        self.grid_step
    }

    /// Quantization step `S`.
    pub fn quant_step(&self) -> u32 {
        self.step
    }

    /// Quantize one channel value.
    pub fn level(&self, channel: u8) -> u8 {
        self.level_of[channel as usize]
    }

    /// Run one dense pass over `frame`, replacing the contents of `out`.
    ///
    /// Cells are visited row-major; cells whose key is all-zero are skipped.
    pub fn quantize_into(&self, frame: &Frame, out: &mut GridSamples) {
        out.samples.clear();

        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let g = self.grid_step as usize;
        let data = frame.data();

        let cols = width.div_ceil(g);
        let rows = height.div_ceil(g);
        out.samples.reserve(cols * rows);

        for y in (0..height).step_by(g) {
            let row = &data[y * width * 3..(y + 1) * width * 3];
            for x in (0..width).step_by(g) {
                let px = &row[x * 3..x * 3 + 3];
                let key = QuantKey::new(
                    self.level_of[px[0] as usize],
                    self.level_of[px[1] as usize],
                    self.level_of[px[2] as usize],
                );
                if key.is_black() {
                    continue;
                }
                out.samples.push(GridSample {
                    key,
                    x: x as u32,
                    y: y as u32,
                });
            }
        }
    }

    /// Convenience wrapper around [`FrameQuantizer::quantize_into`] with a fresh buffer.
    pub fn quantize(&self, frame: &Frame) -> GridSamples {
        let mut out = GridSamples::new();
        self.quantize_into(frame, &mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quantize/quantizer.rs"]
mod tests;
