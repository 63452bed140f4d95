use std::path::Path;

use svg::Document;
use svg::node::element::Rectangle;

use crate::palettes::SQUARE_SIZE;
use crate::palettes::palette::{Palette, PaletteError};

impl Palette {
	/// Lays the palette out as a grid of squares, `colors_per_row` squares wide, filling rows left to right.
	/// Cells after the last color stay empty.
	pub fn to_svg_document(&self, colors_per_row: usize) -> Result<Document, PaletteError> {
		// both sides of the canvas have to fit into u32 user units
		let width = u32::try_from(colors_per_row).ok()
			.filter(|n| *n > 0)
			.and_then(|n| n.checked_mul(SQUARE_SIZE))
			.ok_or(PaletteError::InvalidRowWidth(colors_per_row))?;

		let rows = self.len().div_ceil(colors_per_row);
		let height = u32::try_from(rows).ok()
			.and_then(|n| n.checked_mul(SQUARE_SIZE))
			.ok_or(PaletteError::TooManyColors)?;

		let document = Document::new()
			.set("width", width)
			.set("height", height)
			.set("viewBox", (0, 0, width, height));

		let document = self.colors.values().enumerate().fold(document, |doc, (i, c)| {
			let row = (i / colors_per_row) as u32;
			let col = (i % colors_per_row) as u32;

			let square = Rectangle::new()
				.set("x", col * SQUARE_SIZE)
				.set("y", row * SQUARE_SIZE)
				.set("width", SQUARE_SIZE)
				.set("height", SQUARE_SIZE)
				.set("fill", c.rgb_string());

			doc.add(square)
		});

		Ok(document)
	}

	pub fn to_svg_string(&self, colors_per_row: usize) -> Result<String, PaletteError> {
		Ok(self.to_svg_document(colors_per_row)?.to_string())
	}

	pub fn create_svg<P: AsRef<Path>>(&self, path: P, colors_per_row: usize) -> Result<(), PaletteError> {
		let document = self.to_svg_document(colors_per_row)?;
		svg::save(path, &document)?;
		Ok(())
	}
}
