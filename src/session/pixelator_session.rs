use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::PixelatorConfig;
use crate::encode::snapshot::save_snapshot;
use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::media::frame::Frame;
use crate::media::source::FrameSource;
use crate::present::{ControlEvent, PresentFrame, Presenter};
use crate::quantize::palette::{Palette, build_palette};
use crate::quantize::quantizer::{FrameQuantizer, GridSamples};
use crate::render::compositor::Compositor;
use crate::render::surface::Surface;
use crate::session::pacer::FramePacer;

/// Outcome of a single [`PixelatorSession::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A frame was quantized and composited.
    Rendered {
        /// 0-based index of the frame.
        frame_index: u64,
        /// Number of non-black cells drawn.
        cells: usize,
    },
    /// The source has no more frames.
    EndOfStream,
}

/// Why [`PixelatorSession::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunEnd {
    /// The presenter asked to quit.
    Quit,
    /// The video ran out of frames.
    EndOfStream,
}

/// Counters collected over a session's lifetime.
#[derive(Clone, Debug, Default)]
pub struct RunStats {
    /// Frames quantized and composited.
    pub frames_rendered: u64,
    /// Total non-black cells drawn.
    pub cells_drawn: u64,
    /// Snapshots written.
    pub snapshots_saved: u64,
    /// Wall time spent in [`PixelatorSession::run`].
    pub elapsed: Duration,
    /// How the last run ended, if one completed.
    pub end: Option<RunEnd>,
}

/// Tick-driven pipeline: acquire a frame, quantize it, composite it, hand it to a presenter.
///
/// Everything derived from the configuration (palette, level table, surface size) is computed
/// once in [`PixelatorSession::new`]; ticks only reuse those buffers.
pub struct PixelatorSession<S: FrameSource> {
    cfg: PixelatorConfig,
    source: S,
    quantizer: FrameQuantizer,
    compositor: Compositor,
    samples: GridSamples,
    surface: Surface,
    preview: Frame,
    pending: Option<Frame>,
    last_index: Option<u64>,
    stats: RunStats,
}

impl<S: FrameSource> std::fmt::Debug for PixelatorSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelatorSession")
            .field("cfg", &self.cfg)
            .field("last_index", &self.last_index)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<S: FrameSource> PixelatorSession<S> {
    /// Validate `cfg`, build the palette and read the first frame from `source`.
    ///
    /// The first frame fixes the surface size. A source without frames is a configuration
    /// error.
    #[tracing::instrument(skip(cfg, source), fields(grid_step = cfg.grid_step, levels = cfg.levels))]
    pub fn new(cfg: PixelatorConfig, mut source: S) -> PixelatorResult<Self> {
        cfg.validate()?;

        let (palette, step) = build_palette(cfg.levels)?;
        let quantizer = FrameQuantizer::new(cfg.grid_step, cfg.levels)?;
        let compositor = Compositor::new(palette, cfg.grid_step, cfg.background);

        let first = source
            .next_frame()?
            .ok_or_else(|| PixelatorError::config("video source contains no frames"))?;
        let (width, height) = (first.width(), first.height());
        let surface = Surface::new(width, height, cfg.background)?;
        let preview = first.downscale(cfg.preview_scale)?;

        tracing::info!(
            width,
            height,
            quant_step = step,
            palette_len = compositor.palette().len(),
            "session ready"
        );

        Ok(Self {
            cfg,
            source,
            quantizer,
            compositor,
            samples: GridSamples::new(),
            surface,
            preview,
            pending: Some(first),
            last_index: None,
            stats: RunStats::default(),
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &PixelatorConfig {
        &self.cfg
    }

    /// The palette built at construction.
    pub fn palette(&self) -> &Palette {
        self.compositor.palette()
    }

    /// The current composited surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The current preview frame.
    pub fn preview(&self) -> &Frame {
        &self.preview
    }

    /// Samples of the most recent quantization pass.
    pub fn samples(&self) -> &GridSamples {
        &self.samples
    }

    /// Index of the last composited frame, `None` before the first tick.
    pub fn frame_index(&self) -> Option<u64> {
        self.last_index
    }

    /// Counters so far.
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Acquire, quantize and composite the next frame.
    pub fn tick(&mut self) -> PixelatorResult<Tick> {
        let frame = match self.pending.take() {
            Some(f) => f,
            None => match self.source.next_frame()? {
                Some(f) => f,
                None => return Ok(Tick::EndOfStream),
            },
        };

        if frame.width() != self.surface.width() || frame.height() != self.surface.height() {
            return Err(PixelatorError::decode(format!(
                "frame size changed mid-stream: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                self.surface.width(),
                self.surface.height()
            )));
        }

        self.quantizer.quantize_into(&frame, &mut self.samples);
        let cells = self.compositor.composite(&self.samples, &mut self.surface);
        self.preview = frame.downscale(self.cfg.preview_scale)?;

        let frame_index = self.last_index.map_or(0, |i| i + 1);
        self.last_index = Some(frame_index);
        self.stats.frames_rendered += 1;
        self.stats.cells_drawn += cells as u64;

        Ok(Tick::Rendered { frame_index, cells })
    }

    /// Tick until frame `index` is the current frame.
    ///
    /// Fails if the stream ends first. Already-passed indices are an error too, since frames are
    /// never retained.
    pub fn advance_to(&mut self, index: u64) -> PixelatorResult<()> {
        if let Some(cur) = self.last_index
            && cur > index
        {
            return Err(PixelatorError::config(format!(
                "frame {index} was already passed (current frame is {cur})"
            )));
        }
        while self.last_index != Some(index) {
            if self.tick()? == Tick::EndOfStream {
                return Err(PixelatorError::config(format!(
                    "frame {index} is past the end of the video ({} frames)",
                    self.stats.frames_rendered
                )));
            }
        }
        Ok(())
    }

    /// Write the current surface to the configured snapshot path.
    pub fn save_snapshot(&mut self) -> PixelatorResult<()> {
        let path = self.cfg.snapshot_path.clone();
        self.save_snapshot_to(&path)
    }

    /// Write the current surface to `path`, overwriting it.
    pub fn save_snapshot_to(&mut self, path: &Path) -> PixelatorResult<()> {
        save_snapshot(&self.surface, path, self.cfg.jpeg_quality)?;
        self.stats.snapshots_saved += 1;
        Ok(())
    }

    /// Drive `presenter` until it asks to quit or the video ends.
    ///
    /// Each iteration drains input, renders one frame, presents it and waits for the frame
    /// pacer. Save requests write the surface shown by the previous iteration.
    pub fn run(&mut self, presenter: &mut dyn Presenter) -> PixelatorResult<RunStats> {
        let mut pacer = FramePacer::new(self.cfg.target_fps);
        let started = Instant::now();

        let end = 'run: loop {
            let mut quit = false;
            for event in presenter.poll_events()? {
                match event {
                    ControlEvent::Save => self.save_snapshot()?,
                    ControlEvent::Quit => quit = true,
                }
            }
            if quit {
                break 'run RunEnd::Quit;
            }

            match self.tick()? {
                Tick::EndOfStream => break 'run RunEnd::EndOfStream,
                Tick::Rendered { frame_index, cells } => {
                    tracing::trace!(frame_index, cells, "rendered frame");
                    presenter.present(PresentFrame {
                        surface: &self.surface,
                        preview: &self.preview,
                        frame_index,
                        fps: pacer.fps(),
                    })?;
                }
            }
            pacer.wait();
        };

        self.stats.elapsed += started.elapsed();
        self.stats.end = Some(end);
        tracing::info!(
            ?end,
            frames = self.stats.frames_rendered,
            snapshots = self.stats.snapshots_saved,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            "run finished"
        );
        Ok(self.stats.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/pixelator_session.rs"]
mod tests;
