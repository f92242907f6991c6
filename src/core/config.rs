//! Run-time configuration object + fluent builder.

use crate::core::{
    color::ColorScheme,
    constants::{DEFAULT_HEIGHT, MIN_CANVAS_HEIGHT},
    error::{ConfigError, InputError},
    style::Style,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub style: Style,
    /// Canvas rows for `line` / `multiline`; ignored by flat styles.
    pub height: usize,
    pub verbose: bool,
    pub color: Option<ColorScheme>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: Style::Default,
            height: DEFAULT_HEIGHT,
            verbose: false,
            color: None,
        }
    }
}

/// Fluent builder, validated once in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    style: Option<Style>,
    height: Option<usize>,
    verbose: bool,
    color: Option<ColorScheme>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn style(mut self, s: Style) -> Self {
        self.style = Some(s);
        self
    }
    /// Look a style up by name, e.g. `"braille"`.
    #[inline]
    pub fn style_name(self, name: &str) -> Result<Self, InputError> {
        Ok(self.style(name.parse()?))
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, h: usize) -> Self {
        self.height = Some(h);
        self
    }
    #[inline]
    #[must_use]
    pub fn verbose(mut self, v: bool) -> Self {
        self.verbose = v;
        self
    }
    #[inline]
    #[must_use]
    pub fn color<C: Into<ColorScheme>>(mut self, c: C) -> Self {
        self.color = Some(c.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn color_opt(mut self, c: Option<ColorScheme>) -> Self {
        self.color = c;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let style = self.style.unwrap_or_default();
        let height = self.height.unwrap_or(DEFAULT_HEIGHT);
        if style.is_canvas() && height < MIN_CANVAS_HEIGHT {
            return Err(ConfigError::HeightTooSmall {
                min: MIN_CANVAS_HEIGHT,
                got: height,
            });
        }
        Ok(Config {
            style,
            height,
            verbose: self.verbose,
            color: self.color,
        })
    }
}
