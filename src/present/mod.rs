//! Presentation surfaces.
//!
//! A [`Presenter`] shows each composited surface next to a preview of the source frame and
//! reports user input as [`ControlEvent`]s. The session never talks to a windowing system
//! directly.

use crate::foundation::error::PixelatorResult;
use crate::media::frame::Frame;
use crate::render::surface::Surface;

/// Scripted presenter used for tests and offline rendering.
pub mod headless;
/// SDL2 windows (requires the `sdl` feature).
#[cfg(feature = "sdl")]
pub mod sdl;

/// User input the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// Stop the run.
    Quit,
    /// Write the current surface to the snapshot path.
    Save,
}

/// Everything a presenter needs to show one tick.
#[derive(Clone, Copy, Debug)]
pub struct PresentFrame<'a> {
    /// Composited pixel-art surface.
    pub surface: &'a Surface,
    /// Downscaled original frame.
    pub preview: &'a Frame,
    /// 0-based index of the frame being shown.
    pub frame_index: u64,
    /// Measured display rate.
    pub fps: f64,
}

/// A display target driven once per tick.
pub trait Presenter {
    /// Drain pending input. Called once per tick, before the next frame is rendered.
    fn poll_events(&mut self) -> PixelatorResult<Vec<ControlEvent>>;

    /// Show one composited tick.
    fn present(&mut self, frame: PresentFrame<'_>) -> PixelatorResult<()>;
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn poll_events(&mut self) -> PixelatorResult<Vec<ControlEvent>> {
        (**self).poll_events()
    }

    fn present(&mut self, frame: PresentFrame<'_>) -> PixelatorResult<()> {
        (**self).present(frame)
    }
}

/// Available presenter kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenterKind {
    /// No window; stops after an optional frame limit.
    Headless,
    /// SDL2 windows.
    Sdl,
}

/// Construct a presenter for a `width x height` surface and its preview.
pub fn create_presenter(
    kind: PresenterKind,
    surface_size: (u32, u32),
    preview_size: (u32, u32),
    max_frames: Option<u64>,
) -> PixelatorResult<Box<dyn Presenter>> {
    match kind {
        PresenterKind::Headless => {
            let mut p = headless::HeadlessPresenter::new();
            if let Some(n) = max_frames {
                p = p.with_max_frames(n);
            }
            Ok(Box::new(p))
        }
        #[cfg(feature = "sdl")]
        PresenterKind::Sdl => Ok(Box::new(sdl::SdlPresenter::new(
            surface_size,
            preview_size,
            max_frames,
        )?)),
        #[cfg(not(feature = "sdl"))]
        PresenterKind::Sdl => {
            let _ = (surface_size, preview_size);
            Err(crate::PixelatorError::present(
                "windowed playback requires the 'sdl' feature",
            ))
        }
    }
}
