use anyhow::Result;
use palconv::palettes::palette::Palette;

use crate::commands::SvgGridArgs;
use crate::common::*;

pub(crate) fn gpl_to_svg(args: &SvgGridArgs, debug: bool) -> Result<()> {
	let pal = Palette::from_gpl_file(&args.input)?;

	if debug {
		print_debug_header();
		print_palette(&pal);
		eprintln!("Squares per row: {}", args.per_row);
	}

	pal.create_svg(&args.output, args.per_row)?;

	println!("SVG file with colors from {} created: {}", args.input.display(), args.output.display());

	Ok(())
}
