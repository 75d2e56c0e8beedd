//! Style build stage.

use std::fs;
use std::io;

use crate::compile::StyleCompiler;
use crate::context::BuildContext;
use crate::report::Reporter;

/// Compile the style source and overwrite the public stylesheet artifact.
///
/// The artifact is always rewritten, regardless of whether its content
/// changed. A compiler failure is logged in full and the stage returns
/// normally, leaving the previous artifact (if any) on disk unchanged.
pub fn build_style(
    ctx: &BuildContext,
    compiler: &dyn StyleCompiler,
    report: &Reporter,
) -> io::Result<()> {
    match compiler.compile(&ctx.style_source(), true) {
        Ok(css) => {
            let artifact = ctx.style_artifact();
            if let Some(parent) = artifact.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&artifact, css)?;
            report.css_written(&ctx.relative(&artifact));
        }
        Err(err) => {
            report.style_error(&err.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::{LightningStyleCompiler, StyleError};
    use crate::config::default_config;
    use std::path::Path;
    use tempfile::TempDir;

    /// Style compiler stub that always fails.
    struct BrokenStyle;

    impl StyleCompiler for BrokenStyle {
        fn compile(&self, _source: &Path, _minify: bool) -> Result<String, StyleError> {
            Err(StyleError::Compile("expected ident".to_string()))
        }
    }

    fn test_context() -> (TempDir, BuildContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BuildContext::new(default_config(), temp.path().to_path_buf());
        (temp, ctx)
    }

    #[test]
    fn test_build_style_writes_artifact() {
        let (temp, ctx) = test_context();
        fs::write(temp.path().join("style.scss"), "body { margin: 0; }").unwrap();

        build_style(&ctx, &LightningStyleCompiler::new(), &Reporter::with_output(std::io::sink()))
            .unwrap();

        let css = fs::read_to_string(temp.path().join("public/css/style.css")).unwrap();
        assert!(css.contains("body"));
    }

    #[test]
    fn test_compile_failure_leaves_previous_artifact() {
        let (temp, ctx) = test_context();
        let artifact = temp.path().join("public/css/style.css");
        fs::create_dir_all(artifact.parent().unwrap()).unwrap();
        fs::write(&artifact, "body{color:red}").unwrap();

        let result =
            build_style(&ctx, &BrokenStyle, &Reporter::with_output(std::io::sink()));

        // Stage returns normally; previous artifact is bit-for-bit unchanged
        assert!(result.is_ok());
        let after = fs::read(&artifact).unwrap();
        assert_eq!(after, b"body{color:red}");
    }
}
