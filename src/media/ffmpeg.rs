use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::foundation::error::{PixelatorError, PixelatorResult};
use crate::media::frame::{Frame, byte_len};
use crate::media::source::FrameSource;

/// Stream metadata reported by `ffprobe`.
#[derive(Clone, Debug)]
pub struct VideoSourceInfo {
    /// Path the info was probed from.
    pub source_path: PathBuf,
    /// Coded width in pixels.
    pub width: u32,
    /// Coded height in pixels.
    pub height: u32,
    /// Frame-rate numerator.
    pub fps_num: u32,
    /// Frame-rate denominator.
    pub fps_den: u32,
    /// Container duration in seconds (0 when unknown).
    pub duration_sec: f64,
}

impl VideoSourceInfo {
    /// Source frame rate as a float, 0 when unknown.
    pub fn source_fps(&self) -> f64 {
        if self.fps_den == 0 {
            0.0
        } else {
            f64::from(self.fps_num) / f64::from(self.fps_den)
        }
    }
}

/// Probe the first video stream of `source_path` with `ffprobe`.
pub fn probe_video(source_path: &Path) -> PixelatorResult<VideoSourceInfo> {
    #[derive(serde::Deserialize)]
    struct ProbeStream {
        codec_type: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
        r_frame_rate: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        streams: Vec<ProbeStream>,
        format: Option<ProbeFormat>,
    }

    let out = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(source_path)
        .output()
        .map_err(|e| PixelatorError::decode(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(PixelatorError::config(format!(
            "ffprobe could not read '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| PixelatorError::decode(format!("ffprobe json parse failed: {e}")))?;
    let video_stream = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            PixelatorError::config(format!(
                "no video stream found in '{}'",
                source_path.display()
            ))
        })?;
    let width = video_stream
        .width
        .filter(|w| *w > 0)
        .ok_or_else(|| PixelatorError::decode("missing video width from ffprobe"))?;
    let height = video_stream
        .height
        .filter(|h| *h > 0)
        .ok_or_else(|| PixelatorError::decode("missing video height from ffprobe"))?;
    let (fps_num, fps_den) =
        parse_ff_ratio(video_stream.r_frame_rate.as_deref().unwrap_or("0/1")).unwrap_or((0, 1));
    let duration_sec = parsed
        .format
        .as_ref()
        .and_then(|f| f.duration.as_ref())
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);

    Ok(VideoSourceInfo {
        source_path: source_path.to_path_buf(),
        width,
        height,
        fps_num,
        fps_den,
        duration_sec,
    })
}

/// Streams `rgb24` frames out of a system `ffmpeg` child process.
///
/// Frames are read one at a time from the child's stdout; nothing beyond the current frame is
/// buffered on our side. The child is killed and reaped if the reader is dropped early.
pub struct FfmpegFrameReader {
    info: VideoSourceInfo,
    child: Option<Child>,
    stdout: Option<BufReader<ChildStdout>>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    frames_read: u64,
}

impl FfmpegFrameReader {
    /// Open `path` for decoding.
    ///
    /// A missing or unreadable file is a configuration error.
    pub fn open(path: &Path) -> PixelatorResult<Self> {
        if !path.is_file() {
            return Err(PixelatorError::config(format!(
                "video source '{}' does not exist or is not a file",
                path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(PixelatorError::config(
                "ffmpeg is required for video decoding, but was not found on PATH",
            ));
        }

        let info = probe_video(path)?;
        tracing::debug!(
            width = info.width,
            height = info.height,
            fps = info.source_fps(),
            duration_sec = info.duration_sec,
            "probed video source"
        );

        // Autorotation would make decoded dimensions disagree with the probed ones.
        let mut child = Command::new("ffmpeg")
            .args(["-v", "error", "-noautorotate", "-i"])
            .arg(path)
            .args(["-map", "0:v:0", "-f", "rawvideo", "-pix_fmt", "rgb24", "pipe:1"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                PixelatorError::decode(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| PixelatorError::decode("failed to open ffmpeg stdout (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| PixelatorError::decode("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        Ok(Self {
            info,
            child: Some(child),
            stdout: Some(BufReader::new(stdout)),
            stderr_drain: Some(stderr_drain),
            frames_read: 0,
        })
    }

    /// Probed stream metadata.
    pub fn info(&self) -> &VideoSourceInfo {
        &self.info
    }

    /// Number of frames decoded so far.
    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    fn finish(&mut self) -> PixelatorResult<()> {
        drop(self.stdout.take());
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        let status = child.wait().map_err(|e| {
            PixelatorError::decode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| PixelatorError::decode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| PixelatorError::decode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(PixelatorError::decode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }
        tracing::debug!(frames = self.frames_read, "video stream exhausted");
        Ok(())
    }
}

impl FrameSource for FfmpegFrameReader {
    fn dimensions(&self) -> (u32, u32) {
        (self.info.width, self.info.height)
    }

    fn next_frame(&mut self) -> PixelatorResult<Option<Frame>> {
        let Some(stdout) = self.stdout.as_mut() else {
            return Ok(None);
        };

        let mut buf = vec![0u8; byte_len(self.info.width, self.info.height)];
        let filled = read_full(stdout, &mut buf)
            .map_err(|e| PixelatorError::decode(format!("failed to read from ffmpeg: {e}")))?;

        if filled == 0 {
            self.finish()?;
            return Ok(None);
        }
        if filled < buf.len() {
            self.finish()?;
            return Err(PixelatorError::decode(format!(
                "truncated frame after {} frames: got {filled} of {} bytes",
                self.frames_read,
                buf.len()
            )));
        }

        self.frames_read += 1;
        Frame::new(self.info.width, self.info.height, buf).map(Some)
    }
}

impl Drop for FfmpegFrameReader {
    fn drop(&mut self) {
        drop(self.stdout.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
        if let Some(handle) = self.stderr_drain.take() {
            let _ = handle.join();
        }
    }
}

/// Fill `buf` from `reader`, returning how many bytes were read before EOF.
fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn parse_ff_ratio(s: &str) -> Option<(u32, u32)> {
    let mut parts = s.split('/');
    let a = parts.next()?.parse::<u32>().ok()?;
    let b = parts.next()?.parse::<u32>().ok()?;
    if b == 0 {
        return None;
    }
    Some((a, b))
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/media/ffmpeg.rs"]
mod tests;
