//! The compiler boundary.
//!
//! The pipeline treats both compilers as opaque external collaborators: given
//! source files and a fixed configuration, produce compiled output (on disk
//! for scripts, as text for styles) plus diagnostics. The orchestrator never
//! assumes a particular compiler's emission quirks; partial emission on error
//! is allowed and expected.

pub mod script;
pub mod style;

pub use script::RefScriptCompiler;
pub use style::{LightningStyleCompiler, StyleError};

use std::io;
use std::path::{Path, PathBuf};

/// A source location attached to a diagnostic. Line and column are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Path to the file containing the issue
    pub file: PathBuf,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// A compiler-reported issue. Never fatal to the pipeline; always surfaced
/// to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Message text
    pub message: String,
    /// Optional source location
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Create a diagnostic with no source location.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), location: None }
    }

    /// Create a diagnostic with full location information.
    pub fn at(file: impl Into<PathBuf>, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Some(Location { file: file.into(), line, column }),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(loc) => {
                write!(f, "{} ({},{}): {}", loc.file.display(), loc.line, loc.column, self.message)
            }
            None => write!(f, "{}", self.message),
        }
    }
}

/// Target language level for script compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetLevel {
    /// ES5 output
    #[default]
    Es5,
    /// ES2018 output
    Es2018,
}

/// Module format for script compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleKind {
    /// CommonJS modules
    #[default]
    CommonJs,
    /// ES modules
    EsModule,
}

/// Fixed configuration handed to the script compiler on every build.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Target language level
    pub target: TargetLevel,
    /// Module format
    pub module: ModuleKind,
    /// Strict mode
    pub strict: bool,
    /// Skip type-checking of supporting declarations
    pub skip_lib_check: bool,
    /// Strip comments from emitted output
    pub remove_comments: bool,
    /// Output directory for compiled modules
    pub out_dir: PathBuf,
    /// Root directory the output tree mirrors
    pub root_dir: PathBuf,
    /// Emitted file extension (no leading dot)
    pub out_ext: String,
}

/// Result of one script compilation pass.
#[derive(Debug, Default)]
pub struct ScriptOutput {
    /// Pre-emit and emit diagnostics, concatenated in that order
    pub diagnostics: Vec<Diagnostic>,
    /// Files written to the output tree
    pub emitted: Vec<PathBuf>,
}

/// External contract of the script compiler: given a file list and a fixed
/// configuration, write compiled files to disk and report diagnostics.
///
/// Only filesystem failures outside the per-file compile path are returned
/// as errors; per-file problems become diagnostics.
pub trait ScriptCompiler {
    /// Compile the given source files in one pass.
    fn compile(&self, files: &[PathBuf], options: &CompileOptions) -> io::Result<ScriptOutput>;
}

/// External contract of the style compiler: given a source file path, return
/// compiled stylesheet text or a compile error.
pub trait StyleCompiler {
    /// Compile the style source, minifying the output when `minify` is set.
    fn compile(&self, source: &Path, minify: bool) -> Result<String, StyleError>;
}
