use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::snapshot::DEFAULT_JPEG_QUALITY;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::quantize::palette::validate_levels;

/// Immutable run configuration.
///
/// Every field has a default, so a JSON config file only needs to list what it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PixelatorConfig {
    /// Video file to decode.
    pub source: PathBuf,
    /// Cell size in pixels (`G`).
    pub grid_step: u32,
    /// Quantization levels per channel (`L`), in `[2, 256]`.
    pub levels: u32,
    /// Color shown where cells quantize to black.
    pub background: Rgb8,
    /// Size of the original-video preview relative to the source, in `(0, 1]`.
    pub preview_scale: f64,
    /// Display rate cap; `0` renders as fast as possible.
    pub target_fps: u32,
    /// Where the save signal writes the composited surface.
    pub snapshot_path: PathBuf,
    /// JPEG quality of snapshots, in `[1, 100]`.
    pub jpeg_quality: u8,
}

impl Default for PixelatorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("input/sunny.mp4"),
            grid_step: 8,
            levels: 8,
            background: Rgb8::YELLOW,
            preview_scale: 0.5,
            target_fps: 60,
            snapshot_path: PathBuf::from("output/converted_image.jpg"),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PixelatorConfig {
    /// Load a JSON config file. The result is not validated yet.
    pub fn from_path(path: impl AsRef<Path>) -> PixelatorResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PixelatorError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse JSON config from a reader. The result is not validated yet.
    pub fn from_reader(r: impl Read) -> PixelatorResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PixelatorError::config(format!("parse config JSON: {e}")))
    }

    /// Check every range constraint. Does not touch the filesystem.
    pub fn validate(&self) -> PixelatorResult<()> {
        if self.grid_step == 0 {
            return Err(PixelatorError::config("grid_step must be >= 1"));
        }
        validate_levels(self.levels)?;
        if !(self.preview_scale > 0.0 && self.preview_scale <= 1.0) {
            return Err(PixelatorError::config(format!(
                "preview_scale must be in (0, 1], got {}",
                self.preview_scale
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PixelatorError::config(format!(
                "jpeg_quality must be in [1, 100], got {}",
                self.jpeg_quality
            )));
        }
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(PixelatorError::config("snapshot_path must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
