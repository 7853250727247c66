use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PixelatorError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        PixelatorError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        PixelatorError::present("x")
            .to_string()
            .contains("present error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PixelatorError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
