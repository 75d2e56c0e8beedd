//! Built-in style compiler backed by lightningcss.
//!
//! Parses the style source, runs the minifier, and prints compressed output.

use std::fs;
use std::path::Path;
use thiserror::Error;

use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};

use crate::compile::StyleCompiler;

/// Error from the style compiler. The style stage catches and logs these;
/// they never propagate out of the pipeline.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Failed to read the style source
    #[error("cannot read style source: {0}")]
    Read(#[from] std::io::Error),
    /// Parse, minify, or print failure
    #[error("CSS compile error: {0}")]
    Compile(String),
}

/// Style compiler using lightningcss for parsing and minification.
#[derive(Debug, Default)]
pub struct LightningStyleCompiler;

impl LightningStyleCompiler {
    /// Create a new style compiler.
    pub fn new() -> Self {
        Self
    }
}

impl StyleCompiler for LightningStyleCompiler {
    fn compile(&self, source: &Path, minify: bool) -> Result<String, StyleError> {
        let text = fs::read_to_string(source)?;

        let mut sheet = StyleSheet::parse(&text, ParserOptions::default())
            .map_err(|e| StyleError::Compile(e.to_string()))?;
        sheet
            .minify(MinifyOptions::default())
            .map_err(|e| StyleError::Compile(e.to_string()))?;
        let output = sheet
            .to_css(PrinterOptions { minify, ..Default::default() })
            .map_err(|e| StyleError::Compile(e.to_string()))?;

        Ok(output.code)
    }
}
