use rgb::{RGB, RGB8, RGBA8};
use test_case::test_case;
use web_color_names::{closest_name, closest_names, ColorNameResolver,
                      Error, NamedColor, Palette, WEB_COLORS};

#[test_case([0, 0, 0], "Black" ; "black")]
#[test_case([255, 255, 255], "White" ; "white")]
#[test_case([255, 0, 0], "Red" ; "red")]
#[test_case([1, 1, 1], "Black" ; "near black")]
#[test_case([254, 1, 2], "Red" ; "near red")]
#[test_case([0, 0, 130], "Navy" ; "near navy")]
#[test_case([128, 128, 129], "Gray" ; "near gray")]
fn boundary_queries(q: [u8; 3], expected: &str) {
    assert_eq!(closest_name(&q).unwrap(), expected);
}

#[test_case("0,0,0", "Black" ; "comma separated")]
#[test_case("255 255 255", "White" ; "space separated")]
#[test_case("#FF0000", "Red" ; "hex")]
#[test_case("0.4, 0.2, 0.9", "Black" ; "floats")]
#[test_case("#ff00ff", "Fuchsia" ; "alias")]
fn string_queries(q: &str, expected: &str) {
    assert_eq!(closest_name(q).unwrap(), expected);
}

#[test]
fn query_types_agree() {
    let names = ColorNameResolver::web();
    let expected = names.resolve(&[70u8, 130, 180]).unwrap();
    assert_eq!(expected, "SteelBlue");
    assert_eq!(names.resolve(&RGB8::new(70, 130, 180)).unwrap(), expected);
    assert_eq!(names.resolve(&RGBA8::new(70, 130, 180, 0)).unwrap(), expected);
    assert_eq!(names.resolve(&RGB::new(70.2, 129.6, 180.)).unwrap(), expected);
    assert_eq!(names.resolve(&(70, 130, 180)).unwrap(), expected);
    assert_eq!(names.resolve(&vec![70., 130., 180.]).unwrap(), expected);
    assert_eq!(names.resolve("#4682b4").unwrap(), expected);
}

#[test]
fn nearest_returns_reference_color() {
    let c = ColorNameResolver::default().nearest(&[250, 130, 110]).unwrap();
    assert_eq!(c.name(), "Salmon");
    assert_eq!(c.rgb(), RGB8::new(250, 128, 114));
    assert_eq!(WEB_COLORS.get("Salmon"), Some(c.rgb()));
}

#[test]
fn batch_preserves_order() {
    let qs = [[255, 255, 255], [0, 0, 0], [255, 0, 0], [1, 1, 1]];
    assert_eq!(closest_names(&qs).unwrap(), ["White", "Black", "Red", "Black"]);
}

#[test]
fn custom_palette() {
    let palette = Palette::new([
        NamedColor::new("Dark", RGB8::new(0, 0, 0)),
        NamedColor::new(String::from("Light"), RGB8::new(200, 200, 200)),
    ]).unwrap();
    let names = ColorNameResolver::new(&palette);
    assert_eq!(names.resolve(&[90, 90, 90]).unwrap(), "Dark");
    assert_eq!(names.resolve(&[110, 110, 110]).unwrap(), "Light");
    // Equidistant: first listed wins.
    assert_eq!(names.resolve(&[100, 100, 100]).unwrap(), "Dark");
}

#[test]
fn json_palette_order_decides_ties() {
    let palette = Palette::from_json(
        r#"[{"name": "Second", "rgb": [0, 0, 20]},
            {"name": "First", "rgb": [0, 0, 0]}]"#).unwrap();
    let names = ColorNameResolver::new(&palette);
    assert_eq!(names.resolve(&[0, 0, 10]).unwrap(), "Second");
}

#[test]
fn empty_palette_is_an_error() {
    let palette = Palette::new(Vec::new()).unwrap();
    let names = ColorNameResolver::new(&palette);
    let err = names.resolve(&[0, 0, 0]).unwrap_err();
    assert!(matches!(err, Error::EmptyPalette));
    assert_eq!(err.to_string(), "the palette has no colors");
}

#[test]
fn batch_error_names_the_query() {
    let err = closest_names(&["1,2,3", "4,5"]).unwrap_err();
    assert!(matches!(err, Error::InBatch { index: 1, .. }));
    assert_eq!(err.to_string(),
               "query #1: invalid query color: expected 3 components, got 2");
}
