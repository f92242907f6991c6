//! Multi-row column chart: each sample is a bar rising from the bottom row.

use crate::{
    core::{
        constants::{BAR, FLAT_BASELINE},
        data::{ensure_not_empty, extrema},
        error::{InputError, SparkError},
    },
    render::{
        canvas::{Canvas, ensure_height},
        scale::scale_indices,
    },
};

/// Bars scaled onto `height` rows; a level-0 sample still occupies the bottom row.
///
/// Without variation there is nothing to compare, so every row becomes a
/// dashed baseline.
pub fn rasterize_bars(samples: &[f64], height: usize) -> Result<Canvas, SparkError> {
    ensure_not_empty(samples)?;
    ensure_height(height)?;

    let mut canvas = Canvas::new(height, samples.len());
    let (lo, hi) = extrema(samples).ok_or(InputError::Empty)?;
    if hi <= lo {
        for row in 0..height {
            canvas.fill_row(row, FLAT_BASELINE);
        }
        return Ok(canvas);
    }

    for (col, level) in scale_indices(samples, height)?.into_iter().enumerate() {
        for row in (height - 1 - level)..height {
            canvas.put(row, col, BAR);
        }
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staircase() {
        let c = rasterize_bars(&[1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(c.to_lines(), ["  █", " ██", "███"]);
    }

    #[test]
    fn bottom_row_is_always_filled() {
        let c = rasterize_bars(&[10.0, -4.0, 0.0, 7.5], 6).unwrap();
        assert!(c.row(5).unwrap().iter().all(|&g| g == BAR));
        // the maximum reaches the top
        assert_eq!(c.get(0, 0), Some(BAR));
    }

    #[test]
    fn flat_series_is_all_dashes() {
        let c = rasterize_bars(&[2.0, 2.0], 3).unwrap();
        assert_eq!(c.to_lines(), ["--", "--", "--"]);
        let c = rasterize_bars(&[2.0], 2).unwrap();
        assert_eq!(c.to_lines(), ["-", "-"]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(rasterize_bars(&[], 3).unwrap_err().is_invalid_input());
        assert!(
            rasterize_bars(&[1.0, 2.0], 0)
                .unwrap_err()
                .is_invalid_configuration()
        );
    }
}
