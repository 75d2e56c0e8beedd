//! Console reporting for the build pipeline.
//!
//! All operator-facing output goes through [`Reporter`]: an ANSI-colored
//! prefix followed by a plain message. The prefix vocabulary is fixed:
//! `+ build` / `+ css:` / `+ js:` for written files, `- js:` for removed
//! files, `i build:` / `i ts:` / `i js:` / `i watch:` for status lines and
//! `! ts:` / `! css:` for compiler problems. Output is not machine-parseable.

use std::io::Write;
use std::sync::Mutex;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Console reporter with optional colors.
pub struct Reporter {
    /// Whether to use colors
    use_colors: bool,
    /// Output writer (swappable for testing)
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reporter").field("use_colors", &self.use_colors).finish()
    }
}

impl Reporter {
    /// Create a reporter writing to stdout, with colors when stdout is a TTY.
    pub fn new() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
            output: Mutex::new(Box::new(std::io::stdout())),
        }
    }

    /// Create a reporter that writes to a custom output. Colors are disabled
    /// so captured output stays comparable.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self { use_colors: false, output: Mutex::new(Box::new(output)) }
    }

    /// Set whether to use colors.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn line(&self, color: &str, prefix: &str, message: &str) {
        let rendered = if self.use_colors {
            format!("{}{}{} {}", color, prefix, RESET, message)
        } else {
            format!("{} {}", prefix, message)
        };
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", rendered);
        }
    }

    /// `i build:` status line.
    pub fn status(&self, message: &str) {
        self.line(CYAN, "i build:", message);
    }

    /// `+ build` line for a newly created scaffold path.
    pub fn created(&self, rel: &str) {
        self.line(GREEN, "+ build", rel);
    }

    /// `+ css:` line for the written stylesheet artifact.
    pub fn css_written(&self, rel: &str) {
        self.line(GREEN, "+ css:", rel);
    }

    /// `+ js:` line for the written bundle artifact.
    pub fn js_written(&self, rel: &str) {
        self.line(GREEN, "+ js:", rel);
    }

    /// `- js:` line for a removed stale compiled file.
    pub fn js_removed(&self, rel: &str) {
        self.line(RED, "- js:", rel);
    }

    /// `i ts:` line announcing script compilation.
    pub fn compiling(&self) {
        self.line(CYAN, "i ts:", "compiling...");
    }

    /// `! ts:` line for a script compiler diagnostic. Never fatal.
    pub fn diagnostic(&self, message: &str) {
        self.line(RED, "! ts:", message);
    }

    /// `! css:` line for a style compiler failure. Never fatal.
    pub fn style_error(&self, message: &str) {
        self.line(RED, "! css:", message);
    }

    /// `i js:` line reporting how many manifest entries resolved.
    pub fn merged(&self, count: usize) {
        let message = format!("merged {} file{}", count, if count == 1 { "" } else { "s" });
        self.line(CYAN, "i js:", &message);
    }

    /// `i watch:` status line.
    pub fn watching(&self, message: &str) {
        self.line(CYAN, "i watch:", message);
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
