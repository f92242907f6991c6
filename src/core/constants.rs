//! A collection of constants: glyph palettes and canvas limits.

/// Eight rising blocks, the classic sparkline.
pub const DEFAULT_TICKS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];
/// Eight left-aligned fractional blocks
pub const BLOCK_TICKS: [&str; 8] = ["▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"];
pub const ASCII_TICKS: [&str; 5] = [".", "o", "O", "#", "@"];
pub const NUMERIC_TICKS: [&str; 5] = ["1", "2", "3", "4", "5"];
/// Braille fills from the bottom row up
pub const BRAILLE_TICKS: [&str; 4] = ["⣀", "⣤", "⣶", "⣿"];

/// Trend glyphs: down, flat, (unused) rising, up.
pub const ARROW_TICKS: [&str; 4] = ["↓", "→", "↗", "↑"];
pub const ARROW_DOWN: usize = 0;
pub const ARROW_FLAT: usize = 1;
pub const ARROW_UP: usize = 3;

// Canvas glyphs
pub const BLANK: &str = " ";
pub const POINT: &str = "●";
pub const HORIZONTAL: &str = "─";
pub const VERTICAL: &str = "│";
/// Line falls towards the bottom of the canvas
pub const DIAGONAL_DOWN: &str = "╲";
/// Line climbs towards the top of the canvas
pub const DIAGONAL_UP: &str = "╱";
pub const BAR: &str = "█";
/// Fills a multiline canvas when every sample is equal
pub const FLAT_BASELINE: &str = "-";

/// Rows used by `line` and `multiline` unless configured otherwise.
pub const DEFAULT_HEIGHT: usize = 10;
/// A canvas needs a top and a bottom row.
pub const MIN_CANVAS_HEIGHT: usize = 2;

/// Statistics need at least this many samples for a sample standard deviation.
pub const MIN_STATS_SAMPLES: usize = 2;
