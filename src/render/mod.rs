//! Compositing quantized samples into a displayable surface.

/// Palette lookup and cell drawing.
pub mod compositor;
/// RGB8 drawing target.
pub mod surface;
