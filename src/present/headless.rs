use std::collections::VecDeque;

use crate::foundation::error::PixelatorResult;
use crate::present::{ControlEvent, PresentFrame, Presenter};

/// Presenter without a window.
///
/// Events are scripted against the number of frames presented so far: an event scheduled at
/// `n` is returned by the first `poll_events` call made after `n` frames were shown.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    script: VecDeque<(u64, ControlEvent)>,
    max_frames: Option<u64>,
    presented: u64,
    last_size: Option<(u32, u32)>,
}

impl HeadlessPresenter {
    /// A presenter that never emits events on its own.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit [`ControlEvent::Quit`] once `n` frames have been presented.
    pub fn with_max_frames(mut self, n: u64) -> Self {
        self.max_frames = Some(n);
        self
    }

    /// Emit `event` once `after_frames` frames have been presented.
    pub fn schedule(mut self, after_frames: u64, event: ControlEvent) -> Self {
        let pos = self
            .script
            .iter()
            .position(|(at, _)| *at > after_frames)
            .unwrap_or(self.script.len());
        self.script.insert(pos, (after_frames, event));
        self
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Surface size of the last presented frame.
    pub fn last_surface_size(&self) -> Option<(u32, u32)> {
        self.last_size
    }
}

impl Presenter for HeadlessPresenter {
    fn poll_events(&mut self) -> PixelatorResult<Vec<ControlEvent>> {
        let mut events = Vec::new();
        while self
            .script
            .front()
            .is_some_and(|(at, _)| *at <= self.presented)
        {
            if let Some((_, ev)) = self.script.pop_front() {
                events.push(ev);
            }
        }
        if self.max_frames.is_some_and(|n| self.presented >= n) {
            events.push(ControlEvent::Quit);
        }
        Ok(events)
    }

    fn present(&mut self, frame: PresentFrame<'_>) -> PixelatorResult<()> {
        self.presented += 1;
        self.last_size = Some((frame.surface.width(), frame.surface.height()));
        tracing::trace!(
            frame = frame.frame_index,
            fps = frame.fps,
            "headless present"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/present/headless.rs"]
mod tests;
