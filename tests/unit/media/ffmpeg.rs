use std::io::Cursor;

use super::*;

/// Reader that hands out at most `chunk` bytes per call.
struct Trickle {
    inner: Cursor<Vec<u8>>,
    chunk: usize,
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.chunk);
        self.inner.read(&mut buf[..n])
    }
}

#[test]
fn read_full_reassembles_short_reads() {
    let mut r = Trickle {
        inner: Cursor::new((0u8..12).collect()),
        chunk: 5,
    };
    let mut buf = [0u8; 12];
    assert_eq!(read_full(&mut r, &mut buf).unwrap(), 12);
    assert_eq!(buf[11], 11);
    assert_eq!(read_full(&mut r, &mut buf).unwrap(), 0);
}

#[test]
fn read_full_reports_partial_tail() {
    let mut r = Cursor::new(vec![7u8; 10]);
    let mut buf = [0u8; 6];
    assert_eq!(read_full(&mut r, &mut buf).unwrap(), 6);
    assert_eq!(read_full(&mut r, &mut buf).unwrap(), 4);
}

#[test]
fn ff_ratio_parsing() {
    assert_eq!(parse_ff_ratio("30000/1001"), Some((30000, 1001)));
    assert_eq!(parse_ff_ratio("25/0"), None);
    assert_eq!(parse_ff_ratio("abc"), None);
}

#[test]
fn open_missing_file_is_config_error() {
    let err = FfmpegFrameReader::open(Path::new("definitely/not/here.mp4"))
        .err()
        .expect("missing file must fail");
    assert!(matches!(err, PixelatorError::Config(_)));
}

#[test]
fn source_fps_handles_zero_den() {
    let info = VideoSourceInfo {
        source_path: PathBuf::from("a.mp4"),
        width: 2,
        height: 2,
        fps_num: 30,
        fps_den: 0,
        duration_sec: 0.0,
    };
    assert_eq!(info.source_fps(), 0.0);
}
