use std::fs;
use std::path::PathBuf;

use palconv::palettes::color_table::ColorTable;
use palconv::palettes::palette::{Color, Palette, PaletteError};
use palconv::palettes::DEFAULT_EXTRACT_COLUMNS;

fn test_file(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
		.join("tests/palettes")
		.join(name)
}

fn test_table() -> ColorTable {
	ColorTable::from_json_file(test_file("colors.json")).unwrap()
}

#[test]
fn svg_extraction() {
	let pal = Palette::from_svg_file(test_file("drawing.svg"), &test_table(), DEFAULT_EXTRACT_COLUMNS).unwrap();

	assert_eq!(pal.name, "drawing");
	assert_eq!(pal.comment.as_deref(), Some("Extracted from drawing.svg"));
	assert_eq!(pal.columns, 3);

	// document order, fill before stroke on every element, with the RGB found in the document
	let entries = pal.iter().map(|(n, c)| (n.as_str(), *c)).collect::<Vec<(&str, Color)>>();
	assert_eq!(entries, vec![
		("red", Color::new(255, 0, 0)),
		("blue", Color::new(0, 0, 254)),
		("green", Color::new(0, 255, 0)),
		("orange", Color::new(255, 170, 0)),
		("black", Color::new(0x11, 0x22, 0x33)),
	]);
}

#[test]
fn svg_extraction_from_string() {
	let contents = fs::read_to_string(test_file("drawing.svg")).unwrap();
	let pal = Palette::from_svg_string(contents, "my.drawing.svg", &test_table(), 7).unwrap();

	assert_eq!(pal.name, "my.drawing");
	assert_eq!(pal.comment.as_deref(), Some("Extracted from my.drawing.svg"));
	assert_eq!(pal.columns, 7);
	assert_eq!(pal.len(), 5);
}

#[test]
fn svg_extraction_repeated_names() {
	let svg = r##"<svg xmlns="http://www.w3.org/2000/svg">
		<rect fill="#ff0000"/>
		<rect fill="#0000ff"/>
		<rect fill="#fe0101"/>
	</svg>"##;

	let pal = Palette::from_svg_string(svg, "repeat.svg", &test_table(), 3).unwrap();

	// a name seen again keeps its place and takes the latest color
	let entries = pal.iter().map(|(n, c)| (n.as_str(), *c)).collect::<Vec<(&str, Color)>>();
	assert_eq!(entries, vec![
		("red", Color::new(254, 1, 1)),
		("blue", Color::new(0, 0, 255)),
	]);
}

#[test]
fn svg_extraction_ignores_other_attributes() {
	let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:x="urn:example">
		<rect style="fill:#ff0000" x:fill="#0000ff" stop-color="#00ff00"/>
		<rect fill="none" stroke="currentColor"/>
	</svg>"##;

	let pal = Palette::from_svg_string(svg, "none.svg", &test_table(), 3).unwrap();
	assert!(pal.is_empty());
	assert_eq!(pal.name, "none");
}

#[test]
fn svg_extraction_multiple_colors_in_one_attribute() {
	let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect fill="#000 #00f #ff0000ff"/></svg>"##;

	let pal = Palette::from_svg_string(svg, "multi.svg", &test_table(), 3).unwrap();

	// the 8-digit value isn't a 3- or 6-digit token
	let names = pal.iter().map(|(n, _)| n.as_str()).collect::<Vec<&str>>();
	assert_eq!(names, vec!["black", "blue"]);
}

#[test]
fn svg_extraction_broken_xml() {
	let res = Palette::from_svg_file(test_file("broken.svg"), &test_table(), 3);
	assert!(matches!(res, Err(PaletteError::XmlParseError(_))), "got {res:?}");

	let res = Palette::from_svg_string("", "empty.svg", &test_table(), 3);
	assert!(matches!(res, Err(PaletteError::XmlParseError(_))), "got {res:?}");
}

#[test]
fn svg_extraction_missing_file() {
	let res = Palette::from_svg_file(test_file("missing.svg"), &test_table(), 3);
	assert!(matches!(res, Err(PaletteError::IoErr(_))), "got {res:?}");
}

#[test]
fn svg_extraction_empty_table() {
	let table = ColorTable::default();
	let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect fill="#123456"/></svg>"##;

	let res = Palette::from_svg_string(svg, "table.svg", &table, 3);
	assert!(matches!(res, Err(PaletteError::MissingReferenceTable { .. })), "got {res:?}");
}

#[test]
fn svg_extraction_to_gpl() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("drawing.gpl");

	let pal = Palette::from_svg_file(test_file("drawing.svg"), &test_table(), 3).unwrap();
	pal.save_gpl_file(&out).unwrap();

	let contents = fs::read_to_string(&out).unwrap();
	assert!(contents.starts_with("GIMP Palette\nName: drawing\n# Extracted from drawing.svg\nColumns: 3\n255 0 0 red\n"));

	let reloaded = Palette::from_gpl_file(&out).unwrap();
	assert_eq!(reloaded, pal);
}
