//! quotekeep: CLI quote collection manager with remote sync.

use std::process::ExitCode;

use quotekeep::cli;

fn main() -> ExitCode {
    // Logging is initialized by cli::run based on --log-level and --log-format
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");

            if std::env::var("RUST_BACKTRACE").is_ok() {
                if let Some(source) = std::error::Error::source(&e) {
                    eprintln!("Caused by: {source}");
                }
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
