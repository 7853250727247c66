use super::*;
use crate::media::frame::Frame;
use crate::quantize::palette::build_palette;
use crate::quantize::quantizer::FrameQuantizer;

fn pipeline(levels: u32, grid_step: u32, bg: Rgb8) -> (FrameQuantizer, Compositor) {
    let (palette, _) = build_palette(levels).unwrap();
    (
        FrameQuantizer::new(grid_step, levels).unwrap(),
        Compositor::new(palette, grid_step, bg),
    )
}

#[test]
fn black_frame_composites_to_background() {
    let (q, c) = pipeline(8, 4, Rgb8::YELLOW);
    let frame = Frame::solid(16, 12, Rgb8::BLACK).unwrap();
    let mut surface = Surface::new(16, 12, Rgb8::new(1, 1, 1)).unwrap();

    let drawn = c.composite(&q.quantize(&frame), &mut surface);
    assert_eq!(drawn, 0);
    assert!(surface.data().chunks_exact(3).all(|p| p == [255, 255, 0]));
}

#[test]
fn white_frame_composites_to_representative_gray() {
    let (q, c) = pipeline(8, 8, Rgb8::YELLOW);
    let frame = Frame::solid(20, 12, Rgb8::WHITE).unwrap();
    let mut surface = Surface::new(20, 12, Rgb8::BLACK).unwrap();

    let drawn = c.composite(&q.quantize(&frame), &mut surface);
    assert_eq!(drawn, 6);
    // Edge cells are clipped, so the whole surface is covered.
    assert!(surface.data().chunks_exact(3).all(|p| p == [224, 224, 224]));
}

#[test]
fn each_cell_takes_the_color_of_its_top_left_pixel() {
    let (q, c) = pipeline(8, 4, Rgb8::YELLOW);
    let mut frame = Frame::solid(8, 4, Rgb8::BLACK).unwrap();
    // Left cell sampled at (0,0): red. Right cell's sample at (4,0) stays black.
    frame.set_pixel(0, 0, Rgb8::new(255, 0, 0));
    frame.set_pixel(5, 1, Rgb8::WHITE);
    let mut surface = Surface::new(8, 4, Rgb8::BLACK).unwrap();

    c.composite(&q.quantize(&frame), &mut surface);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(surface.pixel(x, y), Some(Rgb8::new(224, 0, 0)));
            assert_eq!(surface.pixel(x + 4, y), Some(Rgb8::YELLOW));
        }
    }
}

#[test]
fn compositing_clears_the_previous_frame() {
    let (q, c) = pipeline(8, 2, Rgb8::BLACK);
    let mut surface = Surface::new(4, 4, Rgb8::BLACK).unwrap();
    c.composite(&q.quantize(&Frame::solid(4, 4, Rgb8::WHITE).unwrap()), &mut surface);
    c.composite(&q.quantize(&Frame::solid(4, 4, Rgb8::BLACK).unwrap()), &mut surface);
    assert!(surface.data().iter().all(|b| *b == 0));
}

#[test]
#[should_panic(expected = "not in the 2-level palette")]
fn palette_miss_is_a_programming_error() {
    let (small_palette, _) = build_palette(2).unwrap();
    let c = Compositor::new(small_palette, 4, Rgb8::BLACK);
    let q = FrameQuantizer::new(4, 8).unwrap();
    let mut surface = Surface::new(4, 4, Rgb8::BLACK).unwrap();
    c.composite(&q.quantize(&Frame::solid(4, 4, Rgb8::WHITE).unwrap()), &mut surface);
}
