use std::path::PathBuf;

use super::*;
use crate::foundation::core::Rgb8;

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_snapshot").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_jpeg_with_surface_dimensions() {
    let path = out_dir("dims").join("nested").join("shot.jpg");
    let surface = Surface::new(40, 24, Rgb8::YELLOW).unwrap();
    save_snapshot(&surface, &path, DEFAULT_JPEG_QUALITY).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (40, 24));
    let px = img.get_pixel(20, 12);
    assert!(px[0] > 240 && px[1] > 240 && px[2] < 16, "{px:?}");
}

#[test]
fn repeated_saves_overwrite() {
    let path = out_dir("overwrite").join("shot.jpg");
    save_snapshot(&Surface::new(16, 16, Rgb8::BLACK).unwrap(), &path, 80).unwrap();
    save_snapshot(&Surface::new(32, 8, Rgb8::WHITE).unwrap(), &path, 80).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (32, 8));
}

#[test]
fn rejects_invalid_quality() {
    let path = out_dir("quality").join("shot.jpg");
    let surface = Surface::new(8, 8, Rgb8::BLACK).unwrap();
    assert!(save_snapshot(&surface, &path, 0).is_err());
    assert!(save_snapshot(&surface, &path, 101).is_err());
    assert!(!path.exists());
}
