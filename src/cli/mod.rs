mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::SparkError;

pub fn run() -> Result<(), SparkError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(&a),
        parse::Command::Styles => {
            handlers::styles();
            Ok(())
        }
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
