use colored::Colorize;
use palconv::palettes::color_table::ColorTable;
use palconv::palettes::palette::Palette;
use std::path::Path;

use anyhow::Result;

pub(crate) fn print_debug_header() {
	eprintln!("{:#^40}", " DEBUG MODE ");
}

/// Lists every palette entry with a swatch, its hex value and its name.
pub(crate) fn print_palette(pal: &Palette) {
	eprintln!("Name: {}", pal.name.as_str().bold());
	if let Some(comment) = &pal.comment {
		eprintln!("Comment: {comment}");
	}
	eprintln!("Columns: {}, Colors: {}", pal.columns, pal.len());

	for (name, c) in pal.iter() {
		eprintln!("{} {c} {name}", "    ".on_truecolor(c.r, c.g, c.b));
	}
}

/// Shows how far every extracted color is from the reference color it was named after.
pub(crate) fn print_matches(pal: &Palette, table: &ColorTable) {
	for (name, c) in pal.iter() {
		let Some(reference) = table.get(name) else {
			continue;
		};
		eprintln!(
			"{} {c} -> {} {reference} {name} (distance {:.2})",
			"    ".on_truecolor(c.r, c.g, c.b),
			"    ".on_truecolor(reference.r, reference.g, reference.b),
			c.distance(reference)
		);
	}
}

/// Loads the reference table from `path`, or the built-in one if no path was given.
pub(crate) fn load_color_table<P: AsRef<Path>>(path: Option<P>) -> Result<ColorTable> {
	let table = match path {
		Some(path) => ColorTable::from_json_file(path)?,
		None => ColorTable::builtin()?,
	};

	Ok(table)
}
