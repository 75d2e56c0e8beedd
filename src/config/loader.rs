//! Configuration loading and discovery for `sitebuild.toml`
//!
//! Provides functions to find and load configuration, falling back to
//! defaults when no config file exists.

use super::schema::SiteConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse sitebuild.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Find `sitebuild.toml` by walking up from the current working directory.
///
/// # Returns
/// - `Some(path)` if a sitebuild.toml file is found
/// - `None` if no config file is found
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find `sitebuild.toml` by walking up from a specific directory.
///
/// This is the internal implementation that allows specifying the start
/// directory, useful for testing.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join("sitebuild.toml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a `sitebuild.toml` file.
///
/// If a path is provided, loads from that file. Otherwise, uses
/// [`find_config`] to locate the config file. If no config file is found,
/// returns the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            let text = fs::read_to_string(&p)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(default_config()),
    }
}

/// The default configuration used when no `sitebuild.toml` exists.
pub fn default_config() -> SiteConfig {
    SiteConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_from_same_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sitebuild.toml"), "").unwrap();

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(temp.path().join("sitebuild.toml")));
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("sitebuild.toml"), "").unwrap();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(nested);
        assert_eq!(found, Some(temp.path().join("sitebuild.toml")));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitebuild.toml");
        fs::write(&path, "[watch]\ndebounce_ms = 42\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.watch.debounce_ms, 42);
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitebuild.toml");
        fs::write(&path, "[project\nbroken").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
