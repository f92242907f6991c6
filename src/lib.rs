//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! use term_spark::{Config, Style, render};
//!
//! let config = Config::builder().style(Style::Default).build().unwrap();
//! let out = render(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], &config).unwrap();
//! assert_eq!(out.lines(), ["▁▂▃▄▅▆▇█"]);
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, ColorError, ColorScheme, colorize},
    config::{Config, ConfigBuilder},
    constants::{DEFAULT_HEIGHT, MIN_CANVAS_HEIGHT},
    data::parse_samples,
    error::{ConfigError, InputError, SparkError},
    stats::{Summary, format_stats},
    style::Style,
};

pub use crate::render::{Canvas, Output, paint, rasterize_bars, rasterize_line, render};

/// Convenience function: parse textual samples, render them in the named
/// style and return the printable lines.
pub fn sparkline<S: AsRef<str>>(
    texts: &[S],
    style: &str,
    height: usize,
) -> Result<Vec<String>, SparkError> {
    let samples = parse_samples(texts)?;
    let config = Config::builder().style_name(style)?.height(height).build()?;
    Ok(render(&samples, &config)?.lines())
}
