//! Sitebuild - command-line build/watch pipeline for small front-end projects

use std::process::ExitCode;

use sitebuild::cli;

fn main() -> ExitCode {
    cli::run()
}
