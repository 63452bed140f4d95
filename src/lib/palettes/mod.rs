pub mod color_table;
pub(crate) mod pal_gpl;
pub(crate) mod pal_latex;
pub(crate) mod pal_svg;
pub mod palette;
pub(crate) mod svg_colors;

/// Used until a GPL file provides a `Name:` line.
pub const PLACEHOLDER_NAME: &str = "Placeholder Name";

/// Side length of one grid square in SVG user units.
pub const SQUARE_SIZE: u32 = 10;

pub const DEFAULT_COLORS_PER_ROW: usize = 2;
pub const MAX_COLORS_PER_ROW: usize = 4096;
pub const DEFAULT_EXTRACT_COLUMNS: u32 = 3;
