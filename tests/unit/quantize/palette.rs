use super::*;

#[test]
fn rejects_out_of_range_levels() {
    assert!(build_palette(0).is_err());
    assert!(build_palette(1).is_err());
    assert!(build_palette(257).is_err());
    assert!(matches!(
        build_palette(1000).unwrap_err(),
        PixelatorError::Config(_)
    ));
}

#[test]
fn step_is_floor_of_256_over_levels() {
    assert_eq!(quant_step(2).unwrap(), 128);
    assert_eq!(quant_step(3).unwrap(), 85);
    assert_eq!(quant_step(8).unwrap(), 32);
    assert_eq!(quant_step(100).unwrap(), 2);
    assert_eq!(quant_step(256).unwrap(), 1);
}

#[test]
fn palette_has_levels_cubed_entries_with_scaled_colors() {
    for levels in [2u32, 3, 5, 8, 16, 17, 64] {
        let (palette, step) = build_palette(levels).unwrap();
        assert_eq!(step, 256 / levels);
        assert_eq!(palette.len(), (levels * levels * levels) as usize);
        assert_eq!(palette.levels(), levels);
        assert_eq!(palette.step(), step);

        for (key, color) in palette.iter() {
            assert_eq!(u32::from(color.r), u32::from(key.r) * step);
            assert_eq!(u32::from(color.g), u32::from(key.g) * step);
            assert_eq!(u32::from(color.b), u32::from(key.b) * step);
            assert_eq!(palette.get(key), Some(color));
        }
    }
}

#[test]
fn max_levels_palette_covers_every_byte() {
    let (palette, step) = build_palette(256).unwrap();
    assert_eq!(step, 1);
    assert_eq!(palette.len(), 256 * 256 * 256);
    assert_eq!(
        palette.get(QuantKey::new(255, 0, 128)),
        Some(Rgb8::new(255, 0, 128))
    );
}

#[test]
fn iter_yields_each_key_once_in_order() {
    let (palette, _) = build_palette(4).unwrap();
    let keys: Vec<QuantKey> = palette.iter().map(|(k, _)| k).collect();
    assert_eq!(keys.len(), 64);
    assert_eq!(keys[0], QuantKey::BLACK);
    assert_eq!(keys[1], QuantKey::new(0, 0, 1));
    assert_eq!(keys[4], QuantKey::new(0, 1, 0));
    assert_eq!(keys[16], QuantKey::new(1, 0, 0));
    assert_eq!(keys[63], QuantKey::new(3, 3, 3));
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn out_of_range_keys_are_absent() {
    let (palette, _) = build_palette(8).unwrap();
    assert!(palette.contains(QuantKey::new(7, 7, 7)));
    assert!(!palette.contains(QuantKey::new(8, 0, 0)));
    assert_eq!(palette.get(QuantKey::new(0, 0, 8)), None);
}

#[test]
fn white_key_for_eight_levels() {
    let (palette, step) = build_palette(8).unwrap();
    assert_eq!(step, 32);
    assert_eq!(
        palette.get(QuantKey::new(7, 7, 7)),
        Some(Rgb8::new(224, 224, 224))
    );
    assert_eq!(palette.get(QuantKey::BLACK), Some(Rgb8::BLACK));
}
