//! Build and clean command implementations

use std::path::Path;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::loader::{find_config, load_config};
use crate::context::BuildContext;
use crate::pipeline::Pipeline;
use crate::report::Reporter;
use crate::watch;

/// Locate and load configuration, returning it with the project root.
fn load_project(
    config_path: Option<&Path>,
    verbose: bool,
) -> Result<BuildContext, String> {
    let discovered = match config_path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    let (config, root) = match discovered {
        Some(path) => {
            if verbose {
                println!("Using config: {}", path.display());
            }
            let config = load_config(Some(&path)).map_err(|e| e.to_string())?;
            let root = path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
            (config, root)
        }
        None => {
            if verbose {
                println!("No sitebuild.toml found, using defaults");
            }
            let root = std::env::current_dir().map_err(|e| e.to_string())?;
            (crate::config::default_config(), root)
        }
    };

    Ok(BuildContext::new(config, root).with_verbose(verbose))
}

/// Run the build command.
pub fn run_build(
    watch: bool,
    full_clean: bool,
    verbose: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let context = match load_project(config_path, verbose) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let pipeline = Pipeline::new(context, Reporter::new());

    if full_clean {
        if let Err(e) = pipeline.clean(true) {
            eprintln!("Clean error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    }

    if let Err(e) = pipeline.build() {
        eprintln!("Build error: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    if watch {
        match watch::watch_and_rebuild(&pipeline) {
            Ok(()) => ExitCode::from(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Watch error: {}", e);
                ExitCode::from(EXIT_ERROR)
            }
        }
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Run the clean command.
pub fn run_clean(all: bool, config_path: Option<&Path>) -> ExitCode {
    let context = match load_project(config_path, false) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let pipeline = Pipeline::new(context, Reporter::new());
    match pipeline.clean(all) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Clean error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
