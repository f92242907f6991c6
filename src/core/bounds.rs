//! Terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Does a rendering `columns` glyphs wide fit on one terminal line?
#[inline]
#[must_use]
pub fn fits_width((w, _): (Width, Height), columns: usize) -> bool {
    columns <= usize::from(w.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_check_is_inclusive() {
        let term = (Width(80), Height(30));
        assert!(fits_width(term, 80));
        assert!(!fits_width(term, 81));
        assert!(fits_width(term, 0));
    }
}
