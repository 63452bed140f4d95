use clap::Parser;
use clap::Subcommand;
use clap::builder::TypedValueParser;
use const_format::formatcp;
use std::path::PathBuf;

use palconv::palettes::{DEFAULT_COLORS_PER_ROW, DEFAULT_EXTRACT_COLUMNS, MAX_COLORS_PER_ROW};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Converts color palettes between GIMP palettes, SVG and LaTeX")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Commands,

	#[arg(long, global = true, help = "Prints the palette before converting it.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct LatexArgs {
	#[arg(help = "The input GIMP palette. (.gpl)")]
	pub input: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SvgGridArgs {
	#[arg(help = "The input GIMP palette. (.gpl)")]
	pub input: PathBuf,
	#[arg(help = "The output SVG file.")]
	pub output: PathBuf,

	#[arg(short = 'r', long, help = "The number of squares per row.", default_value_t = DEFAULT_COLORS_PER_ROW,
		value_parser = clap::value_parser!(u64).range(1..=MAX_COLORS_PER_ROW as u64).map(|v| v as usize))]
	pub per_row: usize,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ExtractArgs {
	#[arg(help = "The input SVG file.")]
	pub input: PathBuf,
	#[arg(help = "The output GIMP palette.")]
	pub output: PathBuf,

	#[arg(short, long, help = "The column count stored in the output palette.", default_value_t = DEFAULT_EXTRACT_COLUMNS)]
	pub columns: u32,
	#[arg(long, help = "A JSON file mapping color names to [r, g, b] arrays. (defaults to the CSS named colors)")]
	pub colors: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints LaTeX color definitions for a GIMP palette")]
	GplToLatex(LatexArgs),

	#[command(about = "Draws a GIMP palette as a grid of squares")]
	GplToSvg(SvgGridArgs),

	#[command(about = "Collects the fill and stroke colors of an SVG file into a GIMP palette")]
	SvgToGpl(ExtractArgs),
}
