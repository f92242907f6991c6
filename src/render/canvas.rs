//! Fixed-size 2D glyph grid, row 0 at the top.

use std::fmt;

use crate::core::{
    constants::{BLANK, MIN_CANVAS_HEIGHT},
    error::ConfigError,
};

/// Canvas styles need a top and a bottom row.
#[inline]
pub fn ensure_height(height: usize) -> Result<(), ConfigError> {
    if height < MIN_CANVAS_HEIGHT {
        Err(ConfigError::HeightTooSmall {
            min: MIN_CANVAS_HEIGHT,
            got: height,
        })
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Vec<&'static str>>,
    width: usize,
}

impl Canvas {
    /// `height` rows of `width` blank cells.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![vec![BLANK; width]; height],
            width,
        }
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&'static str> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Unconditional write; out-of-range coordinates are ignored.
    #[inline]
    pub fn put(&mut self, row: usize, col: usize, glyph: &'static str) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = glyph;
        }
    }

    /// First write wins: only blank cells are touched.
    #[inline]
    pub fn put_if_blank(&mut self, row: usize, col: usize, glyph: &'static str) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            if *cell == BLANK {
                *cell = glyph;
            }
        }
    }

    /// Overwrite a whole row.
    pub fn fill_row(&mut self, row: usize, glyph: &'static str) {
        if let Some(r) = self.cells.get_mut(row) {
            r.fill(glyph);
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<&'static str>] {
        &self.cells
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[&'static str]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    #[must_use]
    pub fn non_blank_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&g| g != BLANK).count()
    }

    /// One printable string per row.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.cells.iter().map(|r| r.concat()).collect()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_floor() {
        assert!(ensure_height(1).is_err());
        assert!(ensure_height(2).is_ok());
    }

    #[test]
    fn starts_blank() {
        let c = Canvas::new(3, 4);
        assert_eq!(c.height(), 3);
        assert_eq!(c.width(), 4);
        assert_eq!(c.non_blank_count(), 0);
        assert_eq!(c.get(2, 3), Some(BLANK));
        assert_eq!(c.get(3, 0), None);
    }

    #[test]
    fn first_write_wins_unless_forced() {
        let mut c = Canvas::new(2, 2);
        c.put_if_blank(0, 0, "a");
        c.put_if_blank(0, 0, "b");
        assert_eq!(c.get(0, 0), Some("a"));
        c.put(0, 0, "c");
        assert_eq!(c.get(0, 0), Some("c"));
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut c = Canvas::new(1, 1);
        c.put(5, 5, "x");
        c.put_if_blank(0, 9, "x");
        c.fill_row(3, "x");
        assert_eq!(c.non_blank_count(), 0);
    }

    #[test]
    fn renders_rows_top_down() {
        let mut c = Canvas::new(2, 3);
        c.fill_row(1, "─");
        c.put(0, 1, "●");
        assert_eq!(c.to_lines(), [" ● ", "───"]);
        assert_eq!(c.to_string(), " ● \n───");
    }
}
