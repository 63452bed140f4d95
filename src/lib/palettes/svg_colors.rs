use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use regex::Regex;
use xml::reader::{EventReader, XmlEvent};

use crate::palettes::color_table::ColorTable;
use crate::palettes::palette::{Color, Palette, PaletteError};

/// Checked on every element, in this order.
const PAINT_ATTRIBUTES: [&str; 2] = ["fill", "stroke"];

impl Palette {
	fn from_svg_internal<R: Read>(reader: R, file_name: &str, table: &ColorTable, columns: u32) -> Result<Palette, PaletteError> {
		let re = Regex::new(r"#(?:[0-9a-fA-F]{3}){1,2}\b").unwrap();

		let stem = Path::new(file_name)
			.file_stem()
			.map(|s| s.to_string_lossy().into_owned())
			.unwrap_or_default();

		let mut pal = Palette::new(stem, columns);
		pal.comment = Some(format!("Extracted from {file_name}"));

		// StartElement events arrive in document order, which is the order colors get added in
		for event in EventReader::new(reader) {
			let XmlEvent::StartElement { attributes, .. } = event? else {
				continue;
			};

			for attr_name in PAINT_ATTRIBUTES {
				let Some(attr) = attributes.iter().find(|a| a.name.prefix.is_none() && a.name.local_name == attr_name) else {
					continue;
				};

				for hex in re.find_iter(&attr.value) {
					let c = Color::from_hex(hex.as_str())?;
					let name = table.nearest(&c)
						.ok_or_else(|| PaletteError::MissingReferenceTable { msg: "the color table is empty".to_string() })?;
					pal.add_color(name, c);
				}
			}
		}

		Ok(pal)
	}

	/// Collects the hex colors used in `fill` and `stroke` attributes of an SVG document.
	///
	/// Every color is named after its nearest neighbor in `table` but keeps the RGB value found
	/// in the document. The palette is named after the file, minus its extension.
	pub fn from_svg_file<P: AsRef<Path>>(path: P, table: &ColorTable, columns: u32) -> Result<Palette, PaletteError> {
		let path = path.as_ref();
		let file_name = path.file_name()
			.map(|s| s.to_string_lossy().into_owned())
			.unwrap_or_default();

		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_svg_internal(reader, &file_name, table, columns)
	}

	/// Like [`Palette::from_svg_file`], with `file_name` standing in for the document's file name.
	pub fn from_svg_string<S: Into<String>>(s: S, file_name: &str, table: &ColorTable, columns: u32) -> Result<Palette, PaletteError> {
		let s = s.into();
		Self::from_svg_internal(s.as_bytes(), file_name, table, columns)
	}
}
