use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_extract::svg_to_gpl;
use crate::cmd_latex::gpl_to_latex;
use crate::cmd_svg::gpl_to_svg;
use crate::commands::{Cli, Commands};

mod cmd_extract;
mod cmd_latex;
mod cmd_svg;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			// usage errors exit with 1, --help and --version with 0
			let _ = e.print();
			return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
		}
	};

	let output: &PathBuf;

	let result = match &cli.command {
		Commands::GplToLatex(args) => {
			return match gpl_to_latex(args, cli.debug) {
				Ok(_) => ExitCode::SUCCESS,
				Err(e) => {
					eprintln!("execution failed: {e:#}");
					ExitCode::FAILURE
				}
			}
		}
		Commands::GplToSvg(args) => {
			output = &args.output;
			gpl_to_svg(args, cli.debug)
		}
		Commands::SvgToGpl(args) => {
			output = &args.output;
			svg_to_gpl(args, cli.debug)
		}
	};

	match result {
		Ok(_) => {
			match fs::metadata(output) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Output file size: {size}");
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
