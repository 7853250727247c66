use super::*;
use serde_json::json;

#[test]
fn parses_hex_with_and_without_hash() {
    assert_eq!(Rgb8::parse("#ff8000").unwrap(), Rgb8::new(255, 128, 0));
    assert_eq!(Rgb8::parse("0A0b0C").unwrap(), Rgb8::new(10, 11, 12));
}

#[test]
fn parses_named_colors_case_insensitive() {
    assert_eq!(Rgb8::parse("yellow").unwrap(), Rgb8::YELLOW);
    assert_eq!(Rgb8::parse("Black").unwrap(), Rgb8::BLACK);
    assert_eq!(Rgb8::parse("grey").unwrap(), Rgb8::parse("gray").unwrap());
}

#[test]
fn rejects_malformed_colors() {
    assert!(Rgb8::parse("#fff").is_err());
    assert!(Rgb8::parse("#gg0000").is_err());
    assert!(Rgb8::parse("chartreuse-ish").is_err());
}

#[test]
fn deserializes_text_object_and_array() {
    let c: Rgb8 = serde_json::from_value(json!("#102030")).unwrap();
    assert_eq!(c, Rgb8::new(16, 32, 48));

    let c: Rgb8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));

    let c: Rgb8 = serde_json::from_value(json!([4, 5, 6])).unwrap();
    assert_eq!(c, Rgb8::new(4, 5, 6));

    assert!(serde_json::from_value::<Rgb8>(json!([1, 2])).is_err());
}

#[test]
fn display_round_trips_through_parse() {
    let c = Rgb8::new(200, 7, 99);
    assert_eq!(c.to_string(), "#c80763");
    assert_eq!(Rgb8::parse(&c.to_string()).unwrap(), c);
}
