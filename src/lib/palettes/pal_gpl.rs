use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use regex::{Captures, Regex};

use crate::palettes::palette::{Color, Palette, PaletteError};

// https://developer.gimp.org/core/standards/gpl/

const GIMP_MAGIC: &str = "GIMP Palette";
const GPL_SUFFIX: &str = ".gpl";

impl Palette {
	fn from_gpl_internal<R: Read + BufRead>(reader: &mut R) -> Result<Palette, PaletteError> {
		let re = Regex::new(r"^(?P<r>[0-9]+)\s+(?P<g>[0-9]+)\s+(?P<b>[0-9]+)\s+(?P<name>.+)").unwrap();

		let mut pal = Palette::default();

		for (i, line) in reader.lines().enumerate() {
			let line = line?;
			let trimmed_line = line.trim();

			if let Some(name) = trimmed_line.strip_prefix("Name:") {
				pal.name = name.trim().to_string();
			} else if let Some(columns) = trimmed_line.strip_prefix("Columns:") {
				let columns = columns.trim();
				pal.columns = columns.parse::<u32>()
					.map_err(|_| PaletteError::MalformedInteger { line: i + 1, value: columns.to_string() })?;
			} else if let Some(comment) = trimmed_line.strip_prefix("#") {
				pal.comment = Some(comment.trim().to_string());
			} else if trimmed_line.starts_with(|c: char| c.is_ascii_digit()) {
				let groups: Captures = match re.captures(trimmed_line) {
					None => continue,
					Some(captures) => captures
				};

				// rows with components outside of 0-255 are skipped like any other malformed row
				let (Ok(r), Ok(g), Ok(b)) = (groups["r"].parse::<u8>(), groups["g"].parse::<u8>(), groups["b"].parse::<u8>()) else {
					continue;
				};

				pal.add_color(&groups["name"], Color::new(r, g, b));
			}
		}

		Ok(pal)
	}

	/// Loads a GIMP palette. The file name must end in `.gpl`.
	pub fn from_gpl_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let path = path.as_ref();
		if !path.as_os_str().to_string_lossy().ends_with(GPL_SUFFIX) {
			return Err(PaletteError::InvalidFormat { path: path.to_path_buf() });
		}

		let f = File::open(path)?;
		let mut reader = BufReader::new(f);
		Self::from_gpl_internal(&mut reader)
	}

	pub fn from_gpl_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let mut reader = BufReader::new(s.as_bytes());
		Self::from_gpl_internal(&mut reader)
	}

	pub fn to_gpl_string(&self) -> String {
		let mut gpl = format!("{GIMP_MAGIC}\nName: {}\n", self.name);
		if let Some(comment) = self.comment.as_ref().filter(|c| !c.is_empty()) {
			gpl += &format!("# {comment}\n");
		}
		gpl += &format!("Columns: {}\n", self.columns);

		// names are written verbatim, so an empty name, surrounding whitespace or an embedded newline won't survive a reload
		for (name, c) in &self.colors {
			gpl += &format!("{} {} {} {name}\n", c.r, c.g, c.b);
		}

		gpl
	}

	pub fn save_gpl_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		let f = File::create(path)?;
		let mut writer = BufWriter::new(f);
		writer.write_all(self.to_gpl_string().as_bytes())?;
		writer.flush()?;
		Ok(())
	}
}
