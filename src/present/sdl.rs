use sdl2::EventPump;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::present::{ControlEvent, PresentFrame, Presenter};

const MAIN_TITLE: &str = "pixelator";
const PREVIEW_TITLE: &str = "pixelator - source";

struct RgbWindow {
    canvas: WindowCanvas,
    creator: TextureCreator<WindowContext>,
    size: (u32, u32),
}

impl RgbWindow {
    fn open(video: &sdl2::VideoSubsystem, title: &str, size: (u32, u32)) -> PixelatorResult<Self> {
        let window = video
            .window(title, size.0, size.1)
            .position_centered()
            .build()
            .map_err(|e| PixelatorError::present(format!("failed to open window: {e}")))?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| PixelatorError::present(format!("failed to create canvas: {e}")))?;
        let creator = canvas.texture_creator();
        Ok(Self {
            canvas,
            creator,
            size,
        })
    }

    fn blit_rgb24(&mut self, width: u32, height: u32, data: &[u8]) -> PixelatorResult<()> {
        if (width, height) != self.size {
            return Err(PixelatorError::present(format!(
                "window expects {}x{} pixels, got {width}x{height}",
                self.size.0, self.size.1
            )));
        }
        // Textures borrow the creator, so one is made per upload.
        let mut texture = self
            .creator
            .create_texture_streaming(PixelFormatEnum::RGB24, width, height)
            .map_err(|e| PixelatorError::present(format!("failed to create texture: {e}")))?;
        texture
            .update(None, data, width as usize * 3)
            .map_err(|e| PixelatorError::present(format!("failed to upload texture: {e}")))?;
        self.canvas
            .copy(&texture, None, None)
            .map_err(PixelatorError::present)?;
        self.canvas.present();
        Ok(())
    }
}

/// Two SDL2 windows: the pixel-art surface and a preview of the source frame.
///
/// Keys: `S` saves a snapshot, `Q`/`Escape` or closing either window quits.
pub struct SdlPresenter {
    _sdl: sdl2::Sdl,
    _video: sdl2::VideoSubsystem,
    events: EventPump,
    main: RgbWindow,
    preview: RgbWindow,
    max_frames: Option<u64>,
    presented: u64,
}

impl SdlPresenter {
    /// Open both windows.
    pub fn new(
        surface_size: (u32, u32),
        preview_size: (u32, u32),
        max_frames: Option<u64>,
    ) -> PixelatorResult<Self> {
        let sdl = sdl2::init().map_err(PixelatorError::present)?;
        let video = sdl.video().map_err(PixelatorError::present)?;
        let main = RgbWindow::open(&video, MAIN_TITLE, surface_size)?;
        let preview = RgbWindow::open(&video, PREVIEW_TITLE, preview_size)?;
        let events = sdl.event_pump().map_err(PixelatorError::present)?;

        tracing::debug!(?surface_size, ?preview_size, "opened sdl windows");
        Ok(Self {
            _sdl: sdl,
            _video: video,
            events,
            main,
            preview,
            max_frames,
            presented: 0,
        })
    }
}

impl Presenter for SdlPresenter {
    fn poll_events(&mut self) -> PixelatorResult<Vec<ControlEvent>> {
        let mut out = Vec::new();
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape | Keycode::Q),
                    ..
                } => out.push(ControlEvent::Quit),
                Event::KeyDown {
                    keycode: Some(Keycode::S),
                    repeat: false,
                    ..
                } => out.push(ControlEvent::Save),
                _ => {}
            }
        }
        if self.max_frames.is_some_and(|n| self.presented >= n) {
            out.push(ControlEvent::Quit);
        }
        Ok(out)
    }

    fn present(&mut self, frame: PresentFrame<'_>) -> PixelatorResult<()> {
        let s = frame.surface;
        self.main.blit_rgb24(s.width(), s.height(), s.data())?;
        let p = frame.preview;
        self.preview.blit_rgb24(p.width(), p.height(), p.data())?;

        self.main
            .canvas
            .window_mut()
            .set_title(&format!("{MAIN_TITLE} - {:.1} fps", frame.fps))
            .map_err(|e| PixelatorError::present(format!("failed to set title: {e}")))?;
        self.presented += 1;
        Ok(())
    }
}
