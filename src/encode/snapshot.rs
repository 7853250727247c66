use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::render::surface::Surface;

/// Default JPEG quality for snapshots.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Write `surface` to `path` as a baseline JPEG, replacing any existing file.
///
/// The image has exactly the surface's dimensions. Missing parent directories are created.
#[tracing::instrument(skip(surface), fields(width = surface.width(), height = surface.height()))]
pub fn save_snapshot(surface: &Surface, path: &Path, quality: u8) -> PixelatorResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(PixelatorError::config(format!(
            "jpeg quality must be in [1, 100], got {quality}"
        )));
    }
    ensure_parent_dir(path)?;

    let file = File::create(path)
        .with_context(|| format!("failed to create snapshot '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, quality)
        .encode(
            surface.data(),
            surface.width(),
            surface.height(),
            image::ExtendedColorType::Rgb8,
        )
        .with_context(|| format!("failed to encode snapshot '{}'", path.display()))?;

    use std::io::Write as _;
    writer
        .flush()
        .with_context(|| format!("failed to flush snapshot '{}'", path.display()))?;

    tracing::info!(path = %path.display(), "saved snapshot");
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> PixelatorResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/snapshot.rs"]
mod tests;
