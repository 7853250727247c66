//! Still-image output of the composited surface.

/// JPEG snapshot writer.
pub mod snapshot;
