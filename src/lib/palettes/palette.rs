use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::palettes::PLACEHOLDER_NAME;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<Color> for [u8; 3] {
	fn from(c: Color) -> Self {
		[c.r, c.g, c.b]
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Color {
	pub fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parses `#RGB` or `#RRGGBB`. The short form doubles every digit, so `#F00` is `#FF0000`.
	pub fn from_hex<S: AsRef<str>>(s: S) -> Result<Color, PaletteError> {
		let trimmed = s.as_ref().trim();

		// remove common hexadecimal prefixes from the string prior to parsing
		let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
		let stripped = stripped.strip_prefix("#").unwrap_or(stripped);

		if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(PaletteError::InvalidHexColor(trimmed.to_string()));
		}

		let expanded = match stripped.len() {
			3 => stripped.chars().flat_map(|c| [c, c]).collect::<String>(),
			6 => stripped.to_string(),
			_ => return Err(PaletteError::InvalidHexColor(trimmed.to_string())),
		};

		let parsed_int = u32::from_str_radix(&expanded, 16)
			.map_err(|_| PaletteError::InvalidHexColor(trimmed.to_string()))?;

		Ok(Color::from(parsed_int))
	}

	/// CSS functional notation, e.g. `rgb(255, 0, 0)`.
	pub fn rgb_string(&self) -> String {
		format!("rgb({}, {}, {})", self.r, self.g, self.b)
	}

	pub fn distance_squared(&self, other: &Color) -> u32 {
		let dr = self.r as i32 - other.r as i32;
		let dg = self.g as i32 - other.g as i32;
		let db = self.b as i32 - other.b as i32;
		(dr * dr + dg * dg + db * db) as u32
	}

	/// Euclidean distance in RGB space.
	pub fn distance(&self, other: &Color) -> f64 {
		(self.distance_squared(other) as f64).sqrt()
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

/// A named, ordered color table plus the metadata a GPL file carries.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	pub name: String,
	/// Layout hint for programs that display the palette as a grid.
	pub columns: u32,
	pub comment: Option<String>,
	pub colors: IndexMap<String, Color>,
}

impl Default for Palette {
	fn default() -> Self {
		Palette::new(PLACEHOLDER_NAME, 0)
	}
}

impl Palette {
	pub fn new<S: Into<String>>(name: S, columns: u32) -> Self {
		Self {
			name: name.into(),
			columns,
			comment: None,
			colors: IndexMap::new(),
		}
	}

	/// Adds a color under `name`. An existing entry keeps its position and gets the new color.
	pub fn add_color<S: Into<String>>(&mut self, name: S, c: Color) {
		self.colors.insert(name.into(), c);
	}

	pub fn get(&self, name: &str) -> Option<&Color> {
		self.colors.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &Color)> {
		self.colors.iter()
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidFormat { path: PathBuf },
	MalformedInteger { line: usize, value: String },
	MissingReferenceTable { msg: String },
	XmlParseError(String),
	InvalidHexColor(String),
	InvalidRowWidth(usize),
	TooManyColors,
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidFormat { path } => write!(f, "Invalid file format, expected a .gpl file: {}", path.display()),
			PaletteError::MalformedInteger { line, value } => write!(f, "Invalid data in line {line}: \"{value}\" is not a valid column count"),
			PaletteError::MissingReferenceTable { msg } => write!(f, "Reference color table unavailable: {msg}"),
			PaletteError::XmlParseError(msg) => write!(f, "Malformed SVG document: {msg}"),
			PaletteError::InvalidHexColor(s) => write!(f, "\"{s}\" is not a valid hexadecimal color value"),
			PaletteError::InvalidRowWidth(n) => write!(f, "Invalid number of colors per row: {n}"),
			PaletteError::TooManyColors => write!(f, "The palette has too many colors to lay out as a grid"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}

impl From<xml::reader::Error> for PaletteError {
	fn from(e: xml::reader::Error) -> Self {
		PaletteError::XmlParseError(e.to_string())
	}
}
