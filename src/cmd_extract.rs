use anyhow::{Context, Result};
use palconv::palettes::palette::Palette;

use crate::commands::ExtractArgs;
use crate::common::*;

pub(crate) fn svg_to_gpl(args: &ExtractArgs, debug: bool) -> Result<()> {
	let table = load_color_table(args.colors.as_ref())?;

	let pal = Palette::from_svg_file(&args.input, &table, args.columns)
		.with_context(|| format!("Couldn't extract colors from {}", args.input.display()))?;

	if debug {
		print_debug_header();
		eprintln!("Reference colors: {}", table.len());
		print_palette(&pal);
		print_matches(&pal, &table);
	}

	if pal.is_empty() {
		eprintln!("NOTE: No hex colors were found in the fill or stroke attributes of {}", args.input.display());
	}

	pal.save_gpl_file(&args.output)?;

	println!("Colors extracted from {} and saved as GIMP palette: {}", args.input.display(), args.output.display());

	Ok(())
}
