//! Rendered result of one call, plus the dispatch that produces it.

use crate::{
    core::{config::Config, error::SparkError, style::Kind},
    render::{
        bars::rasterize_bars,
        canvas::Canvas,
        line::rasterize_line,
        scale::{describe, scale_levels, scale_trend},
    },
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// One glyph per sample.
    Ticks(Vec<&'static str>),
    /// Verbose form of `Ticks`.
    Sentences(Vec<String>),
    /// `height` rows for `line` / `multiline`.
    Canvas(Canvas),
}

impl Output {
    /// Printable lines: ticks on one line, one sentence or canvas row per line.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Output::Ticks(glyphs) => vec![glyphs.concat()],
            Output::Sentences(s) => s.clone(),
            Output::Canvas(c) => c.to_lines(),
        }
    }

    /// Glyph columns of the widest line.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Output::Ticks(glyphs) => glyphs.len(),
            Output::Sentences(s) => s.iter().map(|l| l.chars().count()).max().unwrap_or(0),
            Output::Canvas(c) => c.width(),
        }
    }
}

/// Render `samples` according to `config`.
pub fn render(samples: &[f64], config: &Config) -> Result<Output, SparkError> {
    log::debug!(
        "rendering {} samples as `{}` (height {}, verbose {})",
        samples.len(),
        config.style,
        config.height,
        config.verbose
    );

    let glyphs = match config.style.kind() {
        Kind::Level(palette) => scale_levels(samples, palette)?,
        Kind::Trend(palette) => scale_trend(samples, palette)?,
        Kind::Bars => return canvas_output(rasterize_bars(samples, config.height)?, config),
        Kind::Line => return canvas_output(rasterize_line(samples, config.height)?, config),
    };

    if config.verbose {
        Ok(Output::Sentences(describe(&glyphs)))
    } else {
        Ok(Output::Ticks(glyphs))
    }
}

fn canvas_output(canvas: Canvas, config: &Config) -> Result<Output, SparkError> {
    if config.verbose {
        log::warn!("verbose output is not available for `{}`", config.style);
    }
    Ok(Output::Canvas(canvas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::Style;

    fn cfg(style: Style) -> Config {
        Config::builder().style(style).build().unwrap()
    }

    #[test]
    fn level_style_joins_on_one_line() {
        let out = render(&[1.0, 5.0, 3.0], &cfg(Style::Numeric)).unwrap();
        assert_eq!(out, Output::Ticks(vec!["1", "5", "3"]));
        assert_eq!(out.lines(), ["153"]);
        assert_eq!(out.width(), 3);
    }

    #[test]
    fn verbose_applies_to_arrows_too() {
        let config = Config::builder()
            .style(Style::Arrows)
            .verbose(true)
            .build()
            .unwrap();
        let out = render(&[1.0, 0.0], &config).unwrap();
        assert_eq!(
            out.lines(),
            ["Data point 0 is →.", "Data point 1 is ↓."]
        );
    }

    #[test]
    fn canvas_styles_ignore_verbose() {
        let config = Config::builder()
            .style(Style::Line)
            .height(3)
            .verbose(true)
            .build()
            .unwrap();
        let out = render(&[1.0, 1.0], &config).unwrap();
        assert_eq!(out.lines(), ["  ", "●●", "  "]);
    }

    #[test]
    fn multiline_dispatches_to_bars() {
        let config = Config::builder()
            .style(Style::Multiline)
            .height(2)
            .build()
            .unwrap();
        let out = render(&[0.0, 1.0], &config).unwrap();
        assert_eq!(out.lines(), [" █", "██"]);
    }

    #[test]
    fn empty_input_fails_for_every_style() {
        for style in Style::ALL {
            assert!(render(&[], &cfg(style)).unwrap_err().is_invalid_input());
        }
    }
}
