//! Bundler.
//!
//! Concatenates compiled modules into the public script artifact. No
//! separators are inserted; the bundle is exactly the byte content of each
//! input, in order.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::context::BuildContext;
use crate::report::Reporter;

/// Concatenate `files` in order and overwrite the public script artifact.
///
/// An empty list is valid and produces an empty artifact: during early
/// scaffolding the manifest may resolve to nothing.
pub fn bundle(ctx: &BuildContext, files: &[PathBuf], report: &Reporter) -> io::Result<()> {
    let mut buffer = Vec::new();
    for file in files {
        buffer.extend_from_slice(&fs::read(file)?);
    }

    let artifact = ctx.script_artifact();
    if let Some(parent) = artifact.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&artifact, buffer)?;
    report.js_written(&ctx.relative(&artifact));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use tempfile::TempDir;

    fn test_context() -> (TempDir, BuildContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BuildContext::new(default_config(), temp.path().to_path_buf());
        (temp, ctx)
    }

    #[test]
    fn test_bundle_is_exact_concatenation() {
        let (temp, ctx) = test_context();
        let a = temp.path().join("a.js");
        let b = temp.path().join("b.js");
        let c = temp.path().join("c.js");
        fs::write(&a, "AAA\n").unwrap();
        fs::write(&b, "BBB").unwrap();
        fs::write(&c, "CCC\n").unwrap();

        bundle(&ctx, &[a, b, c], &Reporter::with_output(std::io::sink())).unwrap();

        let out = fs::read_to_string(temp.path().join("public/js/app.js")).unwrap();
        assert_eq!(out, "AAA\nBBBCCC\n");
    }

    #[test]
    fn test_bundle_empty_list_overwrites_with_empty_artifact() {
        let (temp, ctx) = test_context();
        let artifact = temp.path().join("public/js/app.js");
        fs::create_dir_all(artifact.parent().unwrap()).unwrap();
        fs::write(&artifact, "previous bundle").unwrap();

        bundle(&ctx, &[], &Reporter::with_output(std::io::sink())).unwrap();

        assert_eq!(fs::read_to_string(&artifact).unwrap(), "");
    }

    #[test]
    fn test_bundle_missing_input_is_fatal() {
        let (temp, ctx) = test_context();
        let missing = temp.path().join("missing.js");

        let result = bundle(&ctx, &[missing], &Reporter::with_output(std::io::sink()));
        assert!(result.is_err());
    }
}
