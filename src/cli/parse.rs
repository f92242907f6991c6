use clap::{Parser, Subcommand};

use crate::core::constants::DEFAULT_HEIGHT;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(name = "spark", about = "Sparklines, trend arrows and small graphs in the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render numbers given on the command line
    Plot(PlotArgs),
    /// List every style with its glyphs
    Styles,
    /// Show available color names / hex syntax
    Colors,
    /// Render a random walk in every style
    Demo(DemoArgs),
    /// Print example invocations
    Examples,
}

/// `spark plot …`
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct PlotArgs {
    /// Series to draw
    #[arg(value_name = "N", required = true, num_args = 1..)]
    pub numbers: Vec<String>,

    /// default, block, ascii, numeric, braille, arrows, multiline or line
    #[arg(short, long, default_value = "default")]
    pub style: String,

    /// Rows for `line` and `multiline`
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Describe every data point in a sentence
    #[arg(short, long)]
    pub verbose: bool,

    /// Append minimum, maximum, mean and standard deviation
    #[arg(long)]
    pub stats: bool,

    /// Color (name or `#RRGGBB`)
    #[arg(long)]
    pub color: Option<String>,
}

/// `spark demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 40)]
    pub points: usize,
    /// Fixed seed for a repeatable walk (time-based if omitted)
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,
    #[arg(long)]
    pub color: Option<String>,
}
