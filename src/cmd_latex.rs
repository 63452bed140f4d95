use anyhow::Result;
use palconv::palettes::palette::Palette;

use crate::commands::LatexArgs;
use crate::common::*;

pub(crate) fn gpl_to_latex(args: &LatexArgs, debug: bool) -> Result<()> {
	let pal = Palette::from_gpl_file(&args.input)?;

	if debug {
		print_debug_header();
		print_palette(&pal);
	}

	println!("{}", pal.generate_latex());

	Ok(())
}
