//! Script build stage.
//!
//! Recompiles the entire source tree in one pass and surfaces every
//! diagnostic to the log. Diagnostics never abort the build: the compiler's
//! own partial-emission semantics apply and the rest of the pipeline runs
//! against whatever output landed in the intermediate tree.

use std::io;
use std::path::PathBuf;

use glob::glob;

use crate::compile::{CompileOptions, ModuleKind, ScriptCompiler, TargetLevel};
use crate::context::BuildContext;
use crate::report::Reporter;

/// Recursively enumerate all source modules under the source root, sorted.
pub fn discover_sources(ctx: &BuildContext) -> io::Result<Vec<PathBuf>> {
    let pattern = format!("{}/**/*.{}", ctx.src_dir().display(), ctx.source_ext());
    let entries = glob(&pattern)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let mut files: Vec<PathBuf> = entries.filter_map(Result::ok).filter(|p| p.is_file()).collect();
    files.sort();
    Ok(files)
}

/// Fixed compiler configuration used on every build.
fn compile_options(ctx: &BuildContext) -> CompileOptions {
    CompileOptions {
        target: TargetLevel::Es5,
        module: ModuleKind::CommonJs,
        strict: true,
        skip_lib_check: true,
        remove_comments: true,
        out_dir: ctx.out_dir(),
        root_dir: ctx.src_dir(),
        out_ext: ctx.compiled_ext().to_string(),
    }
}

/// Compile the whole source tree into the intermediate output tree.
///
/// Every diagnostic is logged: with a location as
/// `relative-file (line, column): message`, otherwise as the bare message.
pub fn build_script(
    ctx: &BuildContext,
    compiler: &dyn ScriptCompiler,
    report: &Reporter,
) -> io::Result<()> {
    report.compiling();

    let files = discover_sources(ctx)?;
    let output = compiler.compile(&files, &compile_options(ctx))?;

    for diag in &output.diagnostics {
        match &diag.location {
            Some(loc) => report.diagnostic(&format!(
                "{} ({},{}): {}",
                ctx.relative(&loc.file),
                loc.line,
                loc.column,
                diag.message
            )),
            None => report.diagnostic(&diag.message),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::RefScriptCompiler;
    use crate::config::default_config;
    use std::fs;
    use tempfile::TempDir;

    fn test_context() -> (TempDir, BuildContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BuildContext::new(default_config(), temp.path().to_path_buf());
        fs::create_dir_all(temp.path().join("src")).unwrap();
        (temp, ctx)
    }

    #[test]
    fn test_discover_sources_recursive_and_sorted() {
        let (temp, ctx) = test_context();
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::write(temp.path().join("src/core/math.ts"), "").unwrap();
        fs::write(temp.path().join("src/app.ts"), "").unwrap();
        fs::write(temp.path().join("src/readme.md"), "").unwrap();

        let files = discover_sources(&ctx).unwrap();
        assert_eq!(
            files,
            vec![temp.path().join("src/app.ts"), temp.path().join("src/core/math.ts")]
        );
    }

    #[test]
    fn test_build_script_emits_whole_tree() {
        let (temp, ctx) = test_context();
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::write(temp.path().join("src/core/math.ts"), "let x = 1\n").unwrap();
        fs::write(temp.path().join("src/app.ts"), "let y = 2\n").unwrap();

        build_script(&ctx, &RefScriptCompiler::new(), &Reporter::with_output(std::io::sink()))
            .unwrap();

        assert!(temp.path().join("js_build/core/math.js").is_file());
        assert!(temp.path().join("js_build/app.js").is_file());
    }

    #[test]
    fn test_diagnostics_do_not_abort() {
        let (temp, ctx) = test_context();
        fs::write(temp.path().join("src/broken.ts"), "f(\n").unwrap();
        fs::write(temp.path().join("src/fine.ts"), "let x = 1\n").unwrap();

        let result =
            build_script(&ctx, &RefScriptCompiler::new(), &Reporter::with_output(std::io::sink()));

        assert!(result.is_ok());
        assert!(temp.path().join("js_build/broken.js").is_file());
        assert!(temp.path().join("js_build/fine.js").is_file());
    }
}
