//! pixelator turns video into real-time pixel art.
//!
//! Each frame is sampled on a regular grid, every sample is quantized to one of `L` levels per
//! channel, and the matching palette color is painted as a `G x G` cell. Cells that quantize to
//! black are left out so the background color shows through.
//!
//! The pipeline is session-oriented:
//!
//! - Build a validated [`PixelatorConfig`]
//! - Open a [`FrameSource`] (usually [`FfmpegFrameReader`])
//! - Create a [`PixelatorSession`] and either [`PixelatorSession::run`] it against a
//!   [`Presenter`] or step it manually with [`PixelatorSession::tick`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Run configuration.
pub mod config;
/// Snapshot output.
pub mod encode;
/// Frame acquisition.
pub mod media;
/// Presentation surfaces.
pub mod present;
/// Palette construction and grid quantization.
pub mod quantize;
/// Compositing.
pub mod render;
/// Tick-driven render loop.
pub mod session;

pub use crate::foundation::core::Rgb8;
pub use crate::foundation::error::{PixelatorError, PixelatorResult};

pub use crate::config::PixelatorConfig;
pub use crate::encode::snapshot::{DEFAULT_JPEG_QUALITY, save_snapshot};
pub use crate::media::ffmpeg::{FfmpegFrameReader, VideoSourceInfo, is_ffmpeg_on_path, probe_video};
pub use crate::media::frame::Frame;
pub use crate::media::source::{FrameSource, MemoryFrameSource};
pub use crate::present::headless::HeadlessPresenter;
#[cfg(feature = "sdl")]
pub use crate::present::sdl::SdlPresenter;
pub use crate::present::{ControlEvent, PresentFrame, Presenter, PresenterKind, create_presenter};
pub use crate::quantize::palette::{MAX_LEVELS, MIN_LEVELS, Palette, QuantKey, build_palette};
pub use crate::quantize::quantizer::{FrameQuantizer, GridSample, GridSamples};
pub use crate::render::compositor::Compositor;
pub use crate::render::surface::Surface;
pub use crate::session::pixelator_session::{PixelatorSession, RunEnd, RunStats, Tick};
