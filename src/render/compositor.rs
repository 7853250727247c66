use crate::foundation::core::Rgb8;
use crate::quantize::palette::Palette;
use crate::quantize::quantizer::GridSamples;
use crate::render::surface::Surface;

/// Paints quantized grid samples onto a surface.
///
/// The surface is cleared to the background first, so skipped (black) cells show the background.
#[derive(Clone, Debug)]
pub struct Compositor {
    palette: Palette,
    grid_step: u32,
    background: Rgb8,
}

impl Compositor {
    /// Create a compositor drawing `grid_step`-sized cells with colors from `palette`.
    pub fn new(palette: Palette, grid_step: u32, background: Rgb8) -> Self {
        Self {
            palette,
            grid_step,
            background,
        }
    }

    /// The palette used for lookups.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Background color shown through skipped cells.
    pub fn background(&self) -> Rgb8 {
        self.background
    }

    /// Clear `surface` and draw one filled cell per sample. Returns the number of cells drawn.
    ///
    /// # Panics
    ///
    /// Panics if a sample's key is missing from the palette. That only happens when the samples
    /// were produced with a different level count than the palette, which is a programming error.
    pub fn composite(&self, samples: &GridSamples, surface: &mut Surface) -> usize {
        surface.fill(self.background);

        let g = self.grid_step;
        for s in samples {
            let Some(color) = self.palette.get(s.key) else {
                panic!(
                    "quantized key {:?} at ({}, {}) is not in the {}-level palette",
                    s.key,
                    s.x,
                    s.y,
                    self.palette.levels()
                );
            };
            surface.fill_rect(s.x, s.y, g, g, color);
        }
        samples.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
