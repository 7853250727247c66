//! Frame acquisition.
//!
//! Decoding is delegated to the system `ffmpeg`/`ffprobe` binaries; the core only ever sees
//! [`Frame`] values handed out by a [`FrameSource`].

/// `ffmpeg`-backed streaming decoder.
pub mod ffmpeg;
/// RGB8 frame buffer.
pub mod frame;
/// Frame source trait and in-memory source.
pub mod source;
