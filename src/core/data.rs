//! Sample ingest: text to validated `f64` with zero-allocation float parsing.

use crate::core::error::InputError;

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Replace U+2212 MINUS SIGN (as pasted from spreadsheets) with ASCII `-`.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

/// Parse one textual sample; `index` is only used for error reporting.
pub fn parse_sample(text: &str, index: usize) -> Result<f64, InputError> {
    let mut buf = trim(text.as_bytes()).to_vec();
    normalize_unicode_minus(&mut buf);

    let val = lexical_core::parse::<f64>(&buf).map_err(|_| InputError::NotANumber {
        index,
        text: text.to_owned(),
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(InputError::NonFinite { index })
    }
}

/// Parse a whole series, failing on the first bad element.
pub fn parse_samples<S: AsRef<str>>(texts: &[S]) -> Result<Vec<f64>, InputError> {
    if texts.is_empty() {
        return Err(InputError::Empty);
    }
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| parse_sample(t.as_ref(), i))
        .collect()
}

/// Reject empty input early, before any scaling.
#[inline]
pub fn ensure_not_empty(samples: &[f64]) -> Result<(), InputError> {
    if samples.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(())
    }
}

/// Every sample must be a real number; NaN and infinities count as non-numeric.
pub fn ensure_finite(samples: &[f64]) -> Result<(), InputError> {
    match samples.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(InputError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Inclusive `(min, max)` of the series, `None` when empty.
#[must_use]
pub fn extrema(samples: &[f64]) -> Option<(f64, f64)> {
    let (first, rest) = samples.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        let v = parse_samples(&["1", " 2.5 ", "-3e2"]).unwrap();
        assert_eq!(v, vec![1.0, 2.5, -300.0]);
    }

    #[test]
    fn unicode_minus_is_accepted() {
        assert_eq!(parse_sample("\u{2212}4", 0), Ok(-4.0));
    }

    #[test]
    fn non_numeric_text_reports_its_position() {
        let err = parse_samples(&["1", "two", "3"]).unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                index: 1,
                text: "two".into()
            }
        );
    }

    #[test]
    fn empty_series_is_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(parse_samples(&none), Err(InputError::Empty));
        assert_eq!(ensure_not_empty(&[]), Err(InputError::Empty));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(
            ensure_finite(&[1.0, f64::NAN]),
            Err(InputError::NonFinite { index: 1 })
        );
        assert!(matches!(
            parse_sample("inf", 4),
            Err(InputError::NonFinite { index: 4 }) | Err(InputError::NotANumber { index: 4, .. })
        ));
    }

    #[test]
    fn extrema_of_a_series() {
        assert_eq!(extrema(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
        assert_eq!(extrema(&[4.0]), Some((4.0, 4.0)));
        assert_eq!(extrema(&[]), None);
    }
}
