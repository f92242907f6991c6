//! ANSI colour wrapper for printed sparklines.  No external deps.

use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl Error for ColorError {}

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Rgb(u8, u8, u8),
}

/// Every named colour, in the order `spark colors` lists them.
pub const NAMED_COLORS: [(&str, AnsiCode); 9] = [
    ("black", AnsiCode::black()),
    ("red", AnsiCode::red()),
    ("green", AnsiCode::green()),
    ("yellow", AnsiCode::yellow()),
    ("blue", AnsiCode::blue()),
    ("magenta", AnsiCode::magenta()),
    ("cyan", AnsiCode::cyan()),
    ("white", AnsiCode::white()),
    ("orange", AnsiCode::orange()),
];

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[37m")
    }
    pub const fn orange() -> Self {
        Self::Rgb(210, 135, 10)
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, code)| *code)
            .map_or_else(|| Self::from_hex(s.trim()), Ok)
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        let (r, g, b) = (
            byte(h.get(..2).ok_or(ColorError::InvalidHexDigit)?)?,
            byte(h.get(2..4).ok_or(ColorError::InvalidHexDigit)?)?,
            byte(h.get(4..).ok_or(ColorError::InvalidHexDigit)?)?,
        );
        Ok(Self::Rgb(r, g, b))
    }
}

/// Low-to-high ramp used by the `gradient` scheme.
pub const GRADIENT: [AnsiCode; 4] = [
    AnsiCode::green(),
    AnsiCode::yellow(),
    AnsiCode::orange(),
    AnsiCode::red(),
];

/// How printed output is coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    /// Every line in one colour.
    Solid(AnsiCode),
    /// Each glyph (or canvas column) coloured by its sample's level on `GRADIENT`.
    Gradient,
}

impl ColorScheme {
    /// `gradient`, a colour name or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        if s.trim().eq_ignore_ascii_case("gradient") {
            Ok(Self::Gradient)
        } else {
            AnsiCode::from_name(s).map(Self::Solid)
        }
    }
}

impl From<AnsiCode> for ColorScheme {
    #[inline]
    fn from(c: AnsiCode) -> Self {
        Self::Solid(c)
    }
}

/// `ESC[38;2;R;G;Bm` for true colour.
impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.write_str(s),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}
