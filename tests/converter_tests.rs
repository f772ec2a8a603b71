use radica2fusioncad_rs::{
    convert_directory, convert_file,
    converter::{convert_symbol, infer_pins},
    error::Error,
    file_writer::{render_json, render_typescript, SymbolLibrary},
    importer::import_svg,
    svg_models::SymbolIdentity,
    symbol_models::PinDirection,
};
use rstest::rstest;
use std::fs;

const CONTACT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="10 20 100 40">
  <path d="M 10 40 L 110 40"/>
  <path d="M 50 20 L 70 60"/>
</svg>"#;

#[test]
fn test_symbol_conversion() {
    let svg = import_svg(CONTACT_SVG).expect("document should parse");
    let identity = SymbolIdentity::from_file_stem("normally_open_contact", "Control");
    let symbol = convert_symbol(&svg, &identity).expect("conversion should succeed");

    assert_eq!(symbol.id, "normally-open-contact");
    assert_eq!(symbol.name, "Normally Open Contact");
    assert_eq!(symbol.category, "Control");
    assert_eq!(symbol.width, 100.0);
    assert_eq!(symbol.height, 40.0);
    assert_eq!(symbol.svg_path, "M0,20 L100,20 M40,0 L60,40");
    assert_eq!(symbol.source, "radica-software");
    assert_eq!(symbol.tags, vec!["normally open contact".to_string()]);
    assert!(symbol.variants.is_empty());
    assert_eq!(symbol.const_name(), "NORMALLY_OPEN_CONTACT");
}

#[test]
fn test_duplicate_paths_are_extracted_once() {
    let svg = import_svg(
        r#"<svg viewBox="0 0 10 10">
             <path d="M0 0 L10 10"/>
             <path d="M0 0 L10 10"/>
           </svg>"#,
    )
    .unwrap();
    assert_eq!(svg.paths.len(), 1, "Expected identical paths deduplicated");
}

#[test]
fn test_symbol_element_takes_precedence_over_loose_paths() {
    let svg = import_svg(
        r#"<svg viewBox="0 0 10 10">
             <symbol id="s"><path d="M1 1 L2 2"/></symbol>
             <path d="M3 3 L4 4"/>
             <path d="M5 5 L6 6"/>
           </svg>"#,
    )
    .unwrap();
    assert_eq!(svg.paths, vec!["M1 1 L2 2".to_string()]);
}

#[rstest]
#[case(10.0, 100.0, PinDirection::Top, PinDirection::Bottom)]
#[case(100.0, 10.0, PinDirection::Left, PinDirection::Right)]
#[case(50.0, 50.0, PinDirection::Top, PinDirection::Bottom)]
fn test_aspect_classification(
    #[case] width: f32,
    #[case] height: f32,
    #[case] first: PinDirection,
    #[case] second: PinDirection,
) {
    let pins = infer_pins(width, height, &[]);
    assert_eq!(pins.len(), 2, "Expected exactly two inferred pins");
    assert_eq!(pins[0].direction, first);
    assert_eq!(pins[1].direction, second);
}

#[rstest]
#[case(10.0, 100.0)]
#[case(100.0, 10.0)]
#[case(50.0, 50.0)]
#[case(0.0, 80.0)]
#[case(80.0, 0.0)]
fn test_pins_stay_inside_the_bounding_box(#[case] width: f32, #[case] height: f32) {
    for pin in infer_pins(width, height, &[]) {
        assert!(
            pin.x >= 0.0 && pin.x <= width,
            "pin {} x={} outside [0,{}]",
            pin.id,
            pin.x,
            width
        );
        assert!(
            pin.y >= 0.0 && pin.y <= height,
            "pin {} y={} outside [0,{}]",
            pin.id,
            pin.y,
            height
        );
    }
}

#[test]
fn test_empty_geometry_produces_no_record() {
    let svg = import_svg(r#"<svg viewBox="0 0 10 10"><rect width="5" height="5"/></svg>"#).unwrap();
    let identity = SymbolIdentity::from_file_stem("empty", "Imported");
    let result = convert_symbol(&svg, &identity);
    assert!(
        matches!(result, Err(Error::MissingData(_))),
        "Expected a MissingData error for a path-less document"
    );
}

#[test]
fn test_pipeline_is_deterministic() {
    let identity = SymbolIdentity::from_file_stem("contact", "Control");
    let first = convert_symbol(&import_svg(CONTACT_SVG).unwrap(), &identity).unwrap();
    let second = convert_symbol(&import_svg(CONTACT_SVG).unwrap(), &identity).unwrap();
    assert_eq!(
        render_json(std::slice::from_ref(&first)).unwrap(),
        render_json(std::slice::from_ref(&second)).unwrap(),
        "Two runs over the same document should render identically"
    );
}

#[test]
fn test_json_rendering_structure() {
    let svg = import_svg(CONTACT_SVG).unwrap();
    let identity = SymbolIdentity::from_file_stem("normally_open_contact", "Control");
    let symbol = convert_symbol(&svg, &identity).unwrap();

    let rendered = render_json(&[symbol]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    let records = value.as_array().expect("top level should be an array");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["id"], "normally-open-contact");
    assert_eq!(record["width"], 100.0);
    assert_eq!(record["height"], 40.0);
    assert_eq!(record["pins"].as_array().unwrap().len(), 2);
    assert_eq!(record["pins"][0]["direction"], "left");
    assert_eq!(record["pins"][1]["direction"], "right");
    assert_eq!(record["variants"].as_array().unwrap().len(), 0);
    assert_eq!(record["source"], "radica-software");
    assert_eq!(record["iec_reference"], "");
    assert_eq!(record["tags"][0], "normally open contact");
}

#[test]
fn test_typescript_rendering() {
    let svg = import_svg(CONTACT_SVG).unwrap();
    let identity = SymbolIdentity::from_file_stem("normally_open_contact", "Control");
    let mut symbol = convert_symbol(&svg, &identity).unwrap();

    let without_variants = render_typescript(std::slice::from_ref(&symbol));
    assert!(without_variants.contains("registerSymbol('normally-open-contact', {"));
    assert!(without_variants.contains("  name: 'Normally Open Contact',"));
    assert!(without_variants.contains("  category: 'Control' as SymbolCategory,"));
    assert!(without_variants.contains("  width: 100,"));
    assert!(without_variants.contains("  height: 40,"));
    assert!(without_variants.contains("  svgPath: 'M0,20 L100,20 M40,0 L60,40',"));
    assert!(without_variants.contains("direction: 'left'"));
    assert!(
        !without_variants.contains("variants:"),
        "A symbol without variants should omit the variants field"
    );

    symbol.add_variant("ansi", "M0,0 L10,10".to_string(), "ANSI rendering");
    let with_variants = render_typescript(&[symbol]);
    assert!(with_variants.contains("  variants: ["));
    assert!(with_variants
        .contains("{ variantId: 'ansi', svgPath: 'M0,0 L10,10', description: 'ANSI rendering' }"));

    // Field order is fixed for reproducible diffs.
    let name_at = with_variants.find("  name:").unwrap();
    let category_at = with_variants.find("  category:").unwrap();
    let width_at = with_variants.find("  width:").unwrap();
    let height_at = with_variants.find("  height:").unwrap();
    let path_at = with_variants.find("  svgPath:").unwrap();
    let pins_at = with_variants.find("  pins:").unwrap();
    let variants_at = with_variants.find("  variants:").unwrap();
    assert!(name_at < category_at);
    assert!(category_at < width_at);
    assert!(width_at < height_at);
    assert!(height_at < path_at);
    assert!(path_at < pins_at);
    assert!(pins_at < variants_at);
}

#[test]
fn test_convert_file_derives_identity_from_filename() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("circuit_breaker_3p.svg");
    fs::write(&file, CONTACT_SVG).unwrap();

    let symbol = convert_file(&file, "Power").unwrap();
    assert_eq!(symbol.id, "circuit-breaker-3p");
    assert_eq!(symbol.name, "Circuit Breaker 3p");
    assert_eq!(symbol.category, "Power");
}

#[test]
fn test_directory_batch_skips_malformed_documents() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.svg"), CONTACT_SVG).unwrap();
    fs::write(dir.path().join("two.svg"), CONTACT_SVG).unwrap();
    fs::write(dir.path().join("broken.svg"), "<svg><path d='M0 0'").unwrap();

    let symbols = convert_directory(dir.path(), "Imported").unwrap();
    assert_eq!(
        symbols.len(),
        2,
        "Expected the malformed document to be skipped, not fatal"
    );
    // Sorted file order, not completion order.
    assert_eq!(symbols[0].id, "one");
    assert_eq!(symbols[1].id, "two");
}

#[test]
fn test_directory_batch_with_no_records_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("empty.svg"), r#"<svg viewBox="0 0 5 5"/>"#).unwrap();

    let result = convert_directory(dir.path(), "Imported");
    assert!(
        matches!(result, Err(Error::EmptyBatch(_))),
        "A batch producing zero records should fail as a whole"
    );
}

#[test]
fn test_library_writes_batch_once() {
    let dir = tempfile::tempdir().unwrap();
    let svg = import_svg(CONTACT_SVG).unwrap();
    let identity = SymbolIdentity::from_file_stem("contact", "Control");
    let symbols = vec![convert_symbol(&svg, &identity).unwrap()];

    let library = SymbolLibrary {
        path: dir.path().to_path_buf(),
    };
    library.setup_directories().unwrap();
    let written = library.write_json(&symbols).unwrap();

    let content = fs::read_to_string(written).unwrap();
    assert_eq!(content, render_json(&symbols).unwrap());
}
