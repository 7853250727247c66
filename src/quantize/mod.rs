//! Color quantization: palette construction and the per-frame grid pass.

/// Palette builder and quantized color keys.
pub mod palette;
/// Grid sampler producing `(key, cell)` pairs.
pub mod quantizer;
