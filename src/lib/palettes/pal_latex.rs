use crate::palettes::palette::Palette;

const LATEX_PREAMBLE: &str = "% Define the colors you want\n\\usepackage{xcolor}\n";

impl Palette {
	/// Emits one xcolor `\definecolor` macro per entry, in palette order.
	///
	/// Spaces in color names become underscores. Other characters are passed through as-is,
	/// so names containing LaTeX specials like `%` or `_` need to be cleaned up beforehand.
	pub fn generate_latex(&self) -> String {
		let mut latex = String::from(LATEX_PREAMBLE);

		for (name, c) in &self.colors {
			let latex_name = name.replace(' ', "_");
			latex += &format!("\\definecolor{{{latex_name}}}{{RGB}}{{{}, {}, {}}}\n", c.r, c.g, c.b);
		}

		latex
	}
}
