use crate::foundation::core::Rgb8;
use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::media::frame::byte_len;

/// RGB8 drawing target the compositor paints into.
///
/// Same memory layout as [`crate::Frame`]: tightly packed, row-major `rgb24`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a surface filled with `color`.
    pub fn new(width: u32, height: u32, color: Rgb8) -> PixelatorResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixelatorError::config(
                "surface width/height must be non-zero",
            ));
        }
        let mut s = Self {
            width,
            height,
            data: vec![0u8; byte_len(width, height)],
        };
        s.fill(color);
        Ok(s)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw `rgb24` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width as usize * 3
    }

    /// Color at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y as usize * self.pitch() + x as usize * 3;
        Some(Rgb8::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
        ))
    }

    /// Paint every pixel with `color`.
    pub fn fill(&mut self, color: Rgb8) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(3) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Fill the axis-aligned rectangle at `(x, y)` of size `w x h`, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x1 = x.saturating_add(w).min(self.width) as usize;
        let y1 = y.saturating_add(h).min(self.height) as usize;
        let (x0, y0) = (x as usize, y as usize);
        let px = color.to_array();
        let pitch = self.pitch();

        for row in y0..y1 {
            let start = row * pitch + x0 * 3;
            let end = row * pitch + x1 * 3;
            for chunk in self.data[start..end].chunks_exact_mut(3) {
                chunk.copy_from_slice(&px);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
