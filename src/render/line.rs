//! Connected line graph rasterized with box-drawing glyphs.
//!
//! ### Workflow
//! 1. Scale every sample onto `0..height` and flip it so row 0 is the top.
//! 2. Walk adjacent pairs left to right and draw each segment into the
//!    column of its *left* sample. Segment cells are written blank-only, so
//!    whatever an earlier segment put down stays.
//! 3. Stamp both ends of the series with `●`, overwriting segment glyphs.
//!
//! A segment between rows `y1` and `y2`:
//!
//! ```text
//! |y2 - y1| == 0   ─ in both columns, same row
//! |y2 - y1| == 1   ╲ (falls) or ╱ (climbs) on both rows, left column
//! |y2 - y1| >= 2   │ on every row from y1 to y2, left column
//! ```

use std::cmp::Ordering;

use crate::{
    core::{
        constants::{DIAGONAL_DOWN, DIAGONAL_UP, HORIZONTAL, POINT, VERTICAL},
        data::{ensure_not_empty, extrema},
        error::{InputError, SparkError},
    },
    render::{
        canvas::{Canvas, ensure_height},
        scale::scale_indices,
    },
};

/// Draw `samples` as a `height × samples.len()` line graph.
pub fn rasterize_line(samples: &[f64], height: usize) -> Result<Canvas, SparkError> {
    ensure_not_empty(samples)?;
    ensure_height(height)?;

    let width = samples.len();
    let mid = height / 2;
    let mut canvas = Canvas::new(height, width);

    if width == 1 {
        canvas.put(mid, 0, POINT);
        return Ok(canvas);
    }

    let (lo, hi) = extrema(samples).ok_or(InputError::Empty)?;
    if hi <= lo {
        log::debug!("flat series of {width} samples, drawing midline on row {mid}");
        canvas.fill_row(mid, HORIZONTAL);
        canvas.put(mid, 0, POINT);
        canvas.put(mid, width - 1, POINT);
        return Ok(canvas);
    }

    let rows: Vec<usize> = scale_indices(samples, height)?
        .into_iter()
        .map(|level| height - 1 - level)
        .collect();

    for (col, pair) in rows.windows(2).enumerate() {
        draw_segment(&mut canvas, col, pair[0], pair[1]);
    }

    canvas.put(rows[0], 0, POINT);
    canvas.put(rows[width - 1], width - 1, POINT);

    log::trace!("line canvas {height}×{width}, rows {rows:?}");
    Ok(canvas)
}

fn draw_segment(canvas: &mut Canvas, col: usize, y1: usize, y2: usize) {
    match y1.cmp(&y2) {
        Ordering::Equal => {
            canvas.put_if_blank(y1, col, HORIZONTAL);
            canvas.put_if_blank(y1, col + 1, HORIZONTAL);
        }
        Ordering::Less => vertical_run(canvas, col, y1, y2, DIAGONAL_DOWN),
        Ordering::Greater => vertical_run(canvas, col, y2, y1, DIAGONAL_UP),
    }
}

/// `top..=bottom` in one column: a one-row step is diagonal, anything taller is `│`.
fn vertical_run(canvas: &mut Canvas, col: usize, top: usize, bottom: usize, diagonal: &'static str) {
    let glyph = if bottom - top == 1 { diagonal } else { VERTICAL };
    for row in top..=bottom {
        canvas.put_if_blank(row, col, glyph);
    }
}
