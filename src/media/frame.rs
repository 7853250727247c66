use crate::foundation::core::Rgb8;
use crate::foundation::error::{PixelatorError, PixelatorResult};

/// A decoded video frame as RGB8 pixels.
///
/// Pixels are tightly packed, row-major, three bytes per pixel (`rgb24`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap an `rgb24` buffer, checking that its length matches `width * height * 3`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> PixelatorResult<Self> {
        if width == 0 || height == 0 {
            return Err(PixelatorError::decode("frame width/height must be non-zero"));
        }
        let expected = byte_len(width, height);
        if data.len() != expected {
            return Err(PixelatorError::decode(format!(
                "frame buffer has {} bytes, expected {expected} for {width}x{height} rgb24",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A frame filled with a single color.
    pub fn solid(width: u32, height: u32, color: Rgb8) -> PixelatorResult<Self> {
        let px = color.to_array();
        let data = px
            .iter()
            .copied()
            .cycle()
            .take(byte_len(width, height))
            .collect();
        Self::new(width, height, data)
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw `rgb24` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Color of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb8::new(
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
        ))
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let off = (y as usize * self.width as usize + x as usize) * 3;
        self.data[off..off + 3].copy_from_slice(&color.to_array());
    }

    /// Downscale by `scale` (0 < scale <= 1) with a triangle filter.
    ///
    /// A scale of `1.0` returns a copy. Each output dimension is at least one pixel.
    pub fn downscale(&self, scale: f64) -> PixelatorResult<Self> {
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(PixelatorError::config(format!(
                "downscale factor must be in (0, 1], got {scale}"
            )));
        }
        if scale == 1.0 {
            return Ok(self.clone());
        }

        let w = ((f64::from(self.width) * scale) as u32).max(1);
        let h = ((f64::from(self.height) * scale) as u32).max(1);
        let src = image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| PixelatorError::decode("frame buffer does not match its dimensions"))?;
        let resized = image::imageops::resize(&src, w, h, image::imageops::FilterType::Triangle);
        Self::new(w, h, resized.into_raw())
    }
}

pub(crate) fn byte_len(width: u32, height: u32) -> usize {
    (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(3)
}

#[cfg(test)]
#[path = "../../tests/unit/media/frame.rs"]
mod tests;
