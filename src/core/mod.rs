//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod rng;
pub mod stats;
pub mod style;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, ColorScheme, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_HEIGHT, MIN_CANVAS_HEIGHT};
pub use data::{extrema, parse_samples};
pub use error::{ConfigError, InputError, SparkError};
pub use stats::{Summary, format_stats};
pub use style::{Kind, Style};
