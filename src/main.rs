use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match term_spark::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
