use std::collections::VecDeque;

use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::media::frame::Frame;

/// Producer of decoded frames in presentation order.
///
/// End of stream is reported as `Ok(None)` and is not an error.
pub trait FrameSource {
    /// Frame dimensions `(width, height)` every yielded frame is expected to have.
    fn dimensions(&self) -> (u32, u32);

    /// Decode the next frame, or `Ok(None)` once the stream is exhausted.
    fn next_frame(&mut self) -> PixelatorResult<Option<Frame>>;
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn next_frame(&mut self) -> PixelatorResult<Option<Frame>> {
        (**self).next_frame()
    }
}

/// In-memory frame source for tests and synthetic input.
#[derive(Debug, Default)]
pub struct MemoryFrameSource {
    width: u32,
    height: u32,
    frames: VecDeque<Frame>,
}

impl MemoryFrameSource {
    /// Create a source that yields `frames` in order.
    ///
    /// All frames must share the dimensions of the first one.
    pub fn new(frames: Vec<Frame>) -> PixelatorResult<Self> {
        let first = frames
            .first()
            .ok_or_else(|| PixelatorError::config("memory frame source needs at least one frame"))?;
        let (width, height) = (first.width(), first.height());
        if let Some(bad) = frames
            .iter()
            .find(|f| f.width() != width || f.height() != height)
        {
            return Err(PixelatorError::config(format!(
                "memory frame source mixes {width}x{height} and {}x{} frames",
                bad.width(),
                bad.height()
            )));
        }
        Ok(Self {
            width,
            height,
            frames: frames.into(),
        })
    }

    /// Number of frames not yet yielded.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl FrameSource for MemoryFrameSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn next_frame(&mut self) -> PixelatorResult<Option<Frame>> {
        Ok(self.frames.pop_front())
    }
}
