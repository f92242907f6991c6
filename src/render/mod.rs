pub mod bars;
pub mod canvas;
pub mod line;
pub mod output;
pub mod paint;
pub mod scale;

pub use bars::rasterize_bars;
pub use canvas::Canvas;
pub use line::rasterize_line;
pub use output::{Output, render};
pub use paint::paint;
pub use scale::{describe, scale_indices, scale_levels, scale_trend};
