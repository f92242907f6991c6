//! Samples → palette indices and glyphs.
//!
//! All level-based styles share one linear map over the series' own range:
//!
//! ```text
//! span  = (max - min) / (levels - 1)
//! index = round((v - min) / span)
//! ```
//!
//! `round` is `f64::round`, i.e. ties go away from zero: with eight levels
//! and samples `[0, 2.5, 7]` the middle sample lands on index 3, not 2.
//! A series without variation maps every sample to index 0.

use crate::core::{
    constants::{ARROW_DOWN, ARROW_FLAT, ARROW_UP},
    data::{ensure_not_empty, extrema},
    error::InputError,
};

/// Scale every sample onto `0..levels`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn scale_indices(samples: &[f64], levels: usize) -> Result<Vec<usize>, InputError> {
    ensure_not_empty(samples)?;
    let (lo, hi) = extrema(samples).ok_or(InputError::Empty)?;

    if levels < 2 || hi <= lo {
        log::trace!("degenerate range {lo}..={hi}, all samples on level 0");
        return Ok(vec![0; samples.len()]);
    }

    let span = (hi - lo) / (levels - 1) as f64;
    let top = levels - 1;
    Ok(samples
        .iter()
        .map(|&v| (((v - lo) / span).round() as usize).min(top))
        .collect())
}

/// Level styles: one palette glyph per sample.
pub fn scale_levels(
    samples: &[f64],
    palette: &'static [&'static str],
) -> Result<Vec<&'static str>, InputError> {
    Ok(scale_indices(samples, palette.len())?
        .into_iter()
        .map(|i| palette[i])
        .collect())
}

/// Trend styles: compare each sample with its predecessor.
///
/// The first sample has nothing to compare against and is always shown as
/// "flat", so the output is exactly as long as the input.
pub fn scale_trend(
    samples: &[f64],
    palette: &'static [&'static str],
) -> Result<Vec<&'static str>, InputError> {
    ensure_not_empty(samples)?;

    let mut out = Vec::with_capacity(samples.len());
    out.push(palette[ARROW_FLAT]);
    out.extend(samples.windows(2).map(|pair| {
        let (prev, curr) = (pair[0], pair[1]);
        if curr > prev {
            palette[ARROW_UP]
        } else if curr < prev {
            palette[ARROW_DOWN]
        } else {
            palette[ARROW_FLAT]
        }
    }));
    Ok(out)
}

/// Verbose form: `"Data point {i} is {glyph}."`, 0-based.
#[must_use]
pub fn describe(glyphs: &[&str]) -> Vec<String> {
    glyphs
        .iter()
        .enumerate()
        .map(|(i, g)| format!("Data point {i} is {g}."))
        .collect()
}
