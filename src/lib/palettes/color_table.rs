use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexMap;

use crate::palettes::palette::{Color, PaletteError};

const BUILTIN_TABLE: &str = include_str!("colors.json");

/// Read-only name -> color lookup used to label extracted colors.
///
/// Entries keep the order of the JSON object they were loaded from,
/// which decides ties in [`ColorTable::nearest`].
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ColorTable {
	colors: IndexMap<String, Color>,
}

impl ColorTable {
	fn from_json_internal<R: Read>(reader: R) -> Result<ColorTable, PaletteError> {
		let colors: IndexMap<String, Color> = serde_json::from_reader(reader)
			.map_err(|e| PaletteError::MissingReferenceTable { msg: format!("malformed color table: {e}") })?;

		if colors.is_empty() {
			return Err(PaletteError::MissingReferenceTable { msg: "the color table is empty".to_string() });
		}

		Ok(ColorTable { colors })
	}

	/// Loads a JSON object mapping color names to `[r, g, b]` arrays.
	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<ColorTable, PaletteError> {
		let path = path.as_ref();
		let f = File::open(path)
			.map_err(|e| PaletteError::MissingReferenceTable { msg: format!("can't open {}: {e}", path.display()) })?;
		let reader = BufReader::new(f);
		Self::from_json_internal(reader)
	}

	pub fn from_json_string<S: Into<String>>(s: S) -> Result<ColorTable, PaletteError> {
		let s = s.into();
		Self::from_json_internal(s.as_bytes())
	}

	/// The CSS named colors.
	pub fn builtin() -> Result<ColorTable, PaletteError> {
		Self::from_json_string(BUILTIN_TABLE)
	}

	/// Returns the entry closest to `target` by Euclidean RGB distance.
	/// On ties the entry that comes first in the table wins.
	pub fn nearest(&self, target: &Color) -> Option<&str> {
		self.colors
			.iter()
			.min_by_key(|(_, c)| target.distance_squared(c))
			.map(|(name, _)| name.as_str())
	}

	pub fn get(&self, name: &str) -> Option<&Color> {
		self.colors.get(name)
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

impl<S: Into<String>> FromIterator<(S, Color)> for ColorTable {
	fn from_iter<I: IntoIterator<Item = (S, Color)>>(iter: I) -> Self {
		ColorTable {
			colors: iter.into_iter().map(|(name, c)| (name.into(), c)).collect(),
		}
	}
}
