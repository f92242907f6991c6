use std::io::{Write, stdout};

use crate::{
    core::{
        bounds::{fits_width, terminal_geometry},
        color::{AnsiCode, ColorScheme, NAMED_COLORS, colorize},
        config::Config,
        constants::MIN_STATS_SAMPLES,
        data::parse_samples,
        error::SparkError,
        rng::Lcg,
        stats::format_stats,
        style::Style,
    },
    render::{paint, render},
};

use super::parse::{DemoArgs, PlotArgs};

fn parse_color(name: Option<&str>) -> Result<Option<ColorScheme>, SparkError> {
    Ok(name.map(ColorScheme::from_name).transpose()?)
}

/// Render and colour `samples`; nothing is written yet.
fn printable(samples: &[f64], config: &Config) -> Result<Vec<String>, SparkError> {
    let output = render(samples, config)?;
    let width = output.width();
    if !fits_width(terminal_geometry(), width) {
        log::warn!("rendering is {width} columns wide and will wrap");
    }
    match &config.color {
        Some(scheme) => paint(&output, samples, scheme),
        None => Ok(output.lines()),
    }
}

fn emit(out: &mut impl Write, lines: &[String]) -> Result<(), SparkError> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Everything is validated before the first byte reaches `out`.
fn write_plot(out: &mut impl Write, a: &PlotArgs) -> Result<(), SparkError> {
    let samples = parse_samples(&a.numbers)?;
    let config = Config::builder()
        .style_name(&a.style)?
        .height(a.height)
        .verbose(a.verbose)
        .color_opt(parse_color(a.color.as_deref())?)
        .build()?;

    let lines = printable(&samples, &config)?;
    let stats = if a.stats {
        Some(format_stats(&samples)?)
    } else {
        None
    };

    emit(out, &lines)?;
    if let Some(s) = stats {
        writeln!(out, "{s}")?;
    }
    Ok(())
}

fn write_demo(out: &mut impl Write, a: &DemoArgs, samples: &[f64]) -> Result<(), SparkError> {
    let color = parse_color(a.color.as_deref())?;

    let mut sections = Vec::with_capacity(Style::ALL.len());
    for style in Style::ALL {
        let config = Config::builder()
            .style(style)
            .height(a.height)
            .color_opt(color)
            .build()?;
        sections.push((style, printable(samples, &config)?));
    }
    let stats = format_stats(samples)?;

    for (style, lines) in sections {
        writeln!(out, "{style}:")?;
        emit(out, &lines)?;
        writeln!(out)?;
    }
    writeln!(out, "{stats}")?;
    Ok(())
}

pub fn plot(a: &PlotArgs) -> Result<(), SparkError> {
    let mut term = stdout().lock();
    write_plot(&mut term, a)?;
    term.flush()?;
    Ok(())
}

/// Never shorter than the statistics line needs.
fn demo_walk(a: &DemoArgs) -> Vec<f64> {
    let mut rng = a.seed.map_or_else(Lcg::seed_from_time, Lcg::seed);
    rng.random_walk(a.points.max(MIN_STATS_SAMPLES), 0.0)
}

pub fn demo(a: &DemoArgs) -> Result<(), SparkError> {
    let samples = demo_walk(a);
    log::debug!("demo walk of {} points", samples.len());

    let mut term = stdout().lock();
    write_demo(&mut term, a, &samples)?;
    term.flush()?;
    Ok(())
}

/// One line per style with its palette.
pub fn styles() {
    println!("\nAvailable styles:");
    for style in Style::ALL {
        match style.palette() {
            Some(p) => println!("  {:<10} {}", style.name(), p.join(" ")),
            None => println!("  {:<10} (multi-row, --height rows)", style.name()),
        }
    }
    println!();
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in NAMED_COLORS {
        println!("{}", colorize(&code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)",
        colorize(&AnsiCode::Rgb(0x50, 0x50, 0x50), "#505050")
    );
    println!("gradient  (low values green, high values red)\n");
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "spark";
    println!(
        "
Example invocations
-------------------
• Classic sparkline : {bin} plot 1 5 22 13 53
• Other palette     : {bin} plot 1 5 22 13 53 --style braille
• Trend arrows      : {bin} plot 1 2 3 2 2 7 6 --style arrows
• Line graph        : {bin} plot 3 1 4 1 5 9 2 6 --style line --height 6
• Bar columns       : {bin} plot 3 1 4 1 5 9 2 6 --style multiline
• With statistics   : {bin} plot 1 2 3 4 5 6 7 8 --stats
• Sentences         : {bin} plot 4 8 15 16 23 42 --verbose
• Hex color         : {bin} plot 4 8 15 16 23 42 --color #6048c1
• Heat colours      : {bin} plot 4 8 15 16 23 42 --color gradient
• Random walk       : {bin} demo --points 60 --seed 7
"
    );
}
