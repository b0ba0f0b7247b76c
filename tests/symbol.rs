use barsheet::{EncodeFailure, SymbolImage, SymbolOptions, SymbolRenderer};

fn renderer() -> SymbolRenderer {
    SymbolRenderer::new(SymbolOptions::default())
}

/// Every pixel column is a single colour across the bar band, and the
/// margins around it are blank: there is nowhere for glyphs to hide.
fn assert_bars_only(symbol: &SymbolImage, margin: u32) {
    let img = symbol.pixels();
    let (w, h) = img.dimensions();
    for x in 0..w {
        for y in 0..h {
            let px = img.get_pixel(x, y).0[0];
            if y < margin || y >= h - margin {
                assert_eq!(px, 255, "non-blank margin pixel at ({x}, {y})");
            } else {
                assert_eq!(px, img.get_pixel(x, margin).0[0], "column {x} varies at row {y}");
            }
        }
    }
}

#[test]
fn renders_bars_without_text() {
    let r = renderer();
    assert!(!r.writes_text());
    for value in ["HELLO", "12345", "a b c", "SKU-0001/XL", "~!@#$%^&*()"] {
        let symbol = r.render(value).unwrap();
        assert_bars_only(&symbol, 12);
        let dark = symbol.pixels().pixels().filter(|p| p.0[0] == 0).count();
        assert!(dark > 0, "no bars for {value:?}");
    }
}

#[test]
fn text_request_is_overridden() {
    let asked = SymbolRenderer::new(SymbolOptions {
        write_text: true,
        ..SymbolOptions::default()
    });
    assert!(!asked.writes_text());
    assert!(!asked.options().write_text);

    let a = asked.render("ABC-123").unwrap();
    let b = renderer().render("ABC-123").unwrap();
    assert_eq!(a.pixels().as_raw(), b.pixels().as_raw());
}

#[test]
fn raster_geometry_at_300_dpi() {
    let symbol = renderer().render("HELLO").unwrap();
    // 18mm bars + 1mm above and below.
    assert_eq!(symbol.height(), 213 + 2 * 12);
    // 2mm quiet zones, 0.2mm modules rounded to 2px.
    assert_eq!(symbol.width(), 2 * 24 + symbol.module_count() as u32 * 2);

    let img = symbol.pixels();
    for x in (0..24).chain(symbol.width() - 24..symbol.width()) {
        assert_eq!(img.get_pixel(x, 100).0[0], 255);
    }
}

#[test]
fn each_extra_character_adds_one_symbol_width() {
    let r = renderer();
    let five = r.render("HELLO").unwrap().module_count();
    let six = r.render("HELLO1").unwrap().module_count();
    assert_eq!(six - five, 11);
}

#[test]
fn rendering_is_deterministic() {
    let r = renderer();
    let a = r.render("Deterministic 42").unwrap();
    let b = r.render("Deterministic 42").unwrap();
    assert_eq!(a.pixels().as_raw(), b.pixels().as_raw());
}

#[test]
fn distinct_values_give_distinct_bars() {
    let r = renderer();
    let a = r.render("ABC").unwrap();
    let b = r.render("ABD").unwrap();
    assert_ne!(a.pixels().as_raw(), b.pixels().as_raw());
}

#[test]
fn rejects_empty_value() {
    assert_eq!(renderer().render("").err(), Some(EncodeFailure::Empty));
}

#[test]
fn rejects_characters_outside_set_b() {
    let r = renderer();
    assert_eq!(
        r.render("café").err(),
        Some(EncodeFailure::UnsupportedChar('é'))
    );
    assert_eq!(
        r.render("tab\there").err(),
        Some(EncodeFailure::UnsupportedChar('\t'))
    );
    // Charset switch markers are data here, not control codes.
    assert_eq!(
        r.render("\u{0181}X").err(),
        Some(EncodeFailure::UnsupportedChar('\u{0181}'))
    );
}

#[test]
fn saves_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("symbol.png");
    let symbol = renderer().render("PNG-1").unwrap();
    symbol.save_png(&path).unwrap();

    let loaded = image::open(&path).unwrap().to_luma8();
    assert_eq!(loaded.dimensions(), (symbol.width(), symbol.height()));
    assert_eq!(loaded.as_raw(), symbol.pixels().as_raw());
}
