//! Build context containing configuration and paths for a build.
//!
//! The context is the single place paths are resolved; stages never consult
//! process-wide state. All relative paths in the configuration are resolved
//! against the project root.

use crate::config::SiteConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Build context passed to every pipeline stage.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// The loaded configuration
    config: SiteConfig,
    /// Project root directory (where sitebuild.toml is located)
    project_root: PathBuf,
    /// Whether to run in verbose mode
    verbose: bool,
}

impl BuildContext {
    /// Create a new build context.
    pub fn new(config: SiteConfig, project_root: PathBuf) -> Self {
        Self { config, project_root, verbose: false }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Whether verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Get the script source directory (resolved to an absolute path).
    pub fn src_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.project.src)
    }

    /// Get the intermediate compiled-output directory.
    pub fn out_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.project.out)
    }

    /// Get the public directory holding deployable artifacts.
    pub fn public_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.project.public)
    }

    /// Get the style source file path.
    pub fn style_source(&self) -> PathBuf {
        self.resolve_path(&self.config.project.style)
    }

    /// Get the include manifest path.
    pub fn manifest_path(&self) -> PathBuf {
        self.resolve_path(&self.config.project.manifest)
    }

    /// Get the bundled script artifact path.
    pub fn script_artifact(&self) -> PathBuf {
        self.public_dir().join(&self.config.project.script_artifact)
    }

    /// Get the compiled stylesheet artifact path.
    pub fn style_artifact(&self) -> PathBuf {
        self.public_dir().join(&self.config.project.style_artifact)
    }

    /// Script source extension (no leading dot).
    pub fn source_ext(&self) -> &str {
        &self.config.extensions.source
    }

    /// Compiled module extension (no leading dot).
    pub fn compiled_ext(&self) -> &str {
        &self.config.extensions.compiled
    }

    /// Style source extensions watched for changes.
    pub fn style_exts(&self) -> &[String] {
        &self.config.extensions.style
    }

    /// Debounce window for the watcher.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.config.watch.debounce_ms)
    }

    /// Resolve a path relative to the project root.
    ///
    /// If the path is absolute, returns it unchanged.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Render a path relative to the project root for log output.
    ///
    /// Paths outside the root are displayed as-is.
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
