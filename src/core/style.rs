//! Rendering styles and the name → style dispatch table.

use std::{fmt, str::FromStr};

use crate::core::{
    constants::{
        ARROW_TICKS, ASCII_TICKS, BLOCK_TICKS, BRAILLE_TICKS, DEFAULT_TICKS, NUMERIC_TICKS,
    },
    error::InputError,
};

/// Every supported way of drawing a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Default,
    Block,
    Ascii,
    Numeric,
    Braille,
    Arrows,
    Multiline,
    Line,
}

/// How a style turns samples into glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// One palette glyph per sample, chosen by magnitude.
    Level(&'static [&'static str]),
    /// One glyph per sample, chosen by comparison with its predecessor.
    Trend(&'static [&'static str]),
    /// Filled columns on a `height`-row canvas.
    Bars,
    /// Connected line on a `height`-row canvas.
    Line,
}

impl Style {
    pub const ALL: [Style; 8] = [
        Style::Default,
        Style::Block,
        Style::Ascii,
        Style::Numeric,
        Style::Braille,
        Style::Arrows,
        Style::Multiline,
        Style::Line,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Block => "block",
            Style::Ascii => "ascii",
            Style::Numeric => "numeric",
            Style::Braille => "braille",
            Style::Arrows => "arrows",
            Style::Multiline => "multiline",
            Style::Line => "line",
        }
    }

    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Style::Default => Kind::Level(&DEFAULT_TICKS),
            Style::Block => Kind::Level(&BLOCK_TICKS),
            Style::Ascii => Kind::Level(&ASCII_TICKS),
            Style::Numeric => Kind::Level(&NUMERIC_TICKS),
            Style::Braille => Kind::Level(&BRAILLE_TICKS),
            Style::Arrows => Kind::Trend(&ARROW_TICKS),
            Style::Multiline => Kind::Bars,
            Style::Line => Kind::Line,
        }
    }

    /// Palette for flat styles; canvas styles have none.
    #[must_use]
    pub const fn palette(self) -> Option<&'static [&'static str]> {
        match self.kind() {
            Kind::Level(p) | Kind::Trend(p) => Some(p),
            Kind::Bars | Kind::Line => None,
        }
    }

    /// `true` for styles that draw onto a multi-row canvas.
    #[must_use]
    pub const fn is_canvas(self) -> bool {
        matches!(self.kind(), Kind::Bars | Kind::Line)
    }
}

impl FromStr for Style {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.name() == wanted)
            .ok_or_else(|| InputError::UnknownStyle(s.to_owned()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_round_trips() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>(), Ok(style));
        }
    }

    #[test]
    fn names_ignore_case_and_padding() {
        assert_eq!(" Braille".parse::<Style>(), Ok(Style::Braille));
    }

    #[test]
    fn unknown_name_is_invalid_input() {
        assert_eq!(
            "sparkle".parse::<Style>(),
            Err(InputError::UnknownStyle("sparkle".into()))
        );
    }

    #[test]
    fn palettes_have_at_least_two_glyphs() {
        for style in Style::ALL {
            if let Some(p) = style.palette() {
                assert!(p.len() >= 2, "{style} palette too small");
            } else {
                assert!(style.is_canvas());
            }
        }
    }
}
