//! Configuration schema types for `sitebuild.toml`
//!
//! Defines the structure and defaults for sitebuild project configuration.
//! Every field has a default so a project with no config file at all still
//! builds with the conventional layout.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration loaded from `sitebuild.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Project layout section
    #[serde(default)]
    pub project: ProjectConfig,
    /// File extension conventions
    #[serde(default)]
    pub extensions: ExtensionsConfig,
    /// Watch mode settings
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Project layout section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Source directory for script modules
    #[serde(default = "default_src")]
    pub src: PathBuf,
    /// Intermediate compiled-output tree (mirrors `src` with swapped extensions)
    #[serde(default = "default_out")]
    pub out: PathBuf,
    /// Public directory holding deployable artifacts
    #[serde(default = "default_public")]
    pub public: PathBuf,
    /// Style source file
    #[serde(default = "default_style")]
    pub style: PathBuf,
    /// Include manifest listing module identifiers, one per line
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    /// Bundled script artifact, relative to the public directory
    #[serde(default = "default_script_artifact")]
    pub script_artifact: PathBuf,
    /// Compiled stylesheet artifact, relative to the public directory
    #[serde(default = "default_style_artifact")]
    pub style_artifact: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            src: default_src(),
            out: default_out(),
            public: default_public(),
            style: default_style(),
            manifest: default_manifest(),
            script_artifact: default_script_artifact(),
            style_artifact: default_style_artifact(),
        }
    }
}

fn default_src() -> PathBuf {
    PathBuf::from("src")
}

fn default_out() -> PathBuf {
    PathBuf::from("js_build")
}

fn default_public() -> PathBuf {
    PathBuf::from("public")
}

fn default_style() -> PathBuf {
    PathBuf::from("style.scss")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("src/app.ts")
}

fn default_script_artifact() -> PathBuf {
    PathBuf::from("js/app.js")
}

fn default_style_artifact() -> PathBuf {
    PathBuf::from("css/style.css")
}

/// File extension conventions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    /// Script source extension (no leading dot)
    #[serde(default = "default_source_ext")]
    pub source: String,
    /// Compiled module extension (no leading dot)
    #[serde(default = "default_compiled_ext")]
    pub compiled: String,
    /// Style source extensions watched for changes
    #[serde(default = "default_style_exts")]
    pub style: Vec<String>,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            source: default_source_ext(),
            compiled: default_compiled_ext(),
            style: default_style_exts(),
        }
    }
}

fn default_source_ext() -> String {
    "ts".to_string()
}

fn default_compiled_ext() -> String {
    "js".to_string()
}

fn default_style_exts() -> Vec<String> {
    vec!["scss".to_string(), "sass".to_string()]
}

/// Watch mode settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Debounce window in milliseconds; events within the window after a
    /// rebuild fires are dropped
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { debounce_ms: default_debounce_ms() }
    }
}

fn default_debounce_ms() -> u64 {
    1000
}
