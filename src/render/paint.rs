//! Colour an `Output` for printing.
//!
//! `Solid` wraps whole lines. `Gradient` colours every glyph by the level of
//! the sample it belongs to: tick `i`, sentence `i` and canvas column `i` all
//! take `GRADIENT[level(samples[i])]`. Blank canvas cells stay uncoloured.

use crate::{
    core::{
        color::{AnsiCode, ColorScheme, GRADIENT, colorize},
        constants::BLANK,
        error::SparkError,
    },
    render::{output::Output, scale::scale_indices},
};

/// Printable lines of `output`, coloured per `scheme`.
pub fn paint(
    output: &Output,
    samples: &[f64],
    scheme: &ColorScheme,
) -> Result<Vec<String>, SparkError> {
    let ColorScheme::Solid(code) = scheme else {
        return paint_gradient(output, samples);
    };
    Ok(output
        .lines()
        .iter()
        .map(|line| colorize(code, line))
        .collect())
}

fn paint_gradient(output: &Output, samples: &[f64]) -> Result<Vec<String>, SparkError> {
    let codes: Vec<AnsiCode> = scale_indices(samples, GRADIENT.len())?
        .into_iter()
        .map(|level| GRADIENT[level])
        .collect();
    let tint = |i: usize, text: &str| match codes.get(i) {
        Some(code) => colorize(code, text),
        None => text.to_owned(),
    };

    Ok(match output {
        Output::Ticks(glyphs) => vec![
            glyphs
                .iter()
                .enumerate()
                .map(|(i, g)| tint(i, *g))
                .collect(),
        ],
        Output::Sentences(s) => s.iter().enumerate().map(|(i, l)| tint(i, l.as_str())).collect(),
        Output::Canvas(canvas) => canvas
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(col, &g)| if g == BLANK { g.to_owned() } else { tint(col, g) })
                    .collect()
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{config::Config, style::Style},
        render::output::render,
    };

    fn out(samples: &[f64], style: Style, height: usize) -> Output {
        let config = Config::builder().style(style).height(height).build().unwrap();
        render(samples, &config).unwrap()
    }

    #[test]
    fn solid_wraps_each_line() {
        let o = out(&[1.0, 2.0], Style::Default, 10);
        let lines = paint(&o, &[1.0, 2.0], &ColorScheme::Solid(AnsiCode::cyan())).unwrap();
        assert_eq!(lines, ["\x1b[36m▁█\x1b[0m"]);
    }

    #[test]
    fn gradient_colours_ticks_by_level() {
        let samples = [0.0, 3.0, 1.0];
        let lines = paint(&out(&samples, Style::Default, 10), &samples, &ColorScheme::Gradient)
            .unwrap();
        let expected = format!(
            "{}{}{}",
            colorize(&AnsiCode::green(), "▁"),
            colorize(&AnsiCode::red(), "█"),
            colorize(&AnsiCode::yellow(), "▃"),
        );
        assert_eq!(lines, [expected]);
    }

    #[test]
    fn gradient_colours_canvas_columns_and_skips_blanks() {
        let samples = [0.0, 1.0];
        let lines = paint(&out(&samples, Style::Multiline, 2), &samples, &ColorScheme::Gradient)
            .unwrap();
        let green = |g| colorize(&AnsiCode::green(), g);
        let red = |g| colorize(&AnsiCode::red(), g);
        assert_eq!(
            lines,
            [format!(" {}", red("█")), format!("{}{}", green("█"), red("█"))]
        );
    }

    #[test]
    fn flat_series_is_all_low_colour() {
        let samples = [2.0, 2.0];
        let lines = paint(&out(&samples, Style::Ascii, 10), &samples, &ColorScheme::Gradient)
            .unwrap();
        let g = colorize(&AnsiCode::green(), ".");
        assert_eq!(lines, [format!("{g}{g}")]);
    }
}
