//! Stale-output cleaner.
//!
//! Removes compiled files whose source module no longer exists, so include
//! resolution never observes orphaned output from deleted or renamed
//! sources. Must run after the script stage and before resolution.

use std::fs;
use std::io;
use std::path::PathBuf;

use glob::glob;

use crate::context::BuildContext;
use crate::paths;
use crate::report::Reporter;

/// Delete stale files from the intermediate output tree.
///
/// For each file under the tree, the hypothetical source path is computed by
/// swapping the compiled extension for the source extension; the file is
/// deleted if that source does not exist, or unconditionally when `fullclean`
/// is set. Idempotent: a second run with nothing changed deletes nothing.
///
/// Returns the number of files removed.
pub fn clean(ctx: &BuildContext, fullclean: bool, report: &Reporter) -> io::Result<usize> {
    let out_dir = ctx.out_dir();
    let src_dir = ctx.src_dir();

    let pattern = format!("{}/**/*", out_dir.display());
    let entries = glob(&pattern)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let files: Vec<PathBuf> = entries.filter_map(Result::ok).filter(|p| p.is_file()).collect();

    let mut removed = 0;
    for file in files {
        let source =
            paths::source_from_compiled(&file, &out_dir, &src_dir, ctx.source_ext());
        let stale = match source {
            Some(source) => !source.exists(),
            // Not under the out tree; glob guarantees this cannot happen
            None => false,
        };

        if fullclean || stale {
            fs::remove_file(&file)?;
            report.js_removed(&ctx.relative(&file));
            removed += 1;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use tempfile::TempDir;

    fn test_context() -> (TempDir, BuildContext) {
        let temp = TempDir::new().unwrap();
        let ctx = BuildContext::new(default_config(), temp.path().to_path_buf());
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::create_dir_all(temp.path().join("js_build")).unwrap();
        (temp, ctx)
    }

    fn sink() -> Reporter {
        Reporter::with_output(std::io::sink())
    }

    #[test]
    fn test_clean_removes_exactly_the_orphans() {
        let (temp, ctx) = test_context();
        fs::write(temp.path().join("src/a.ts"), "").unwrap();
        fs::write(temp.path().join("src/b.ts"), "").unwrap();
        fs::write(temp.path().join("js_build/a.js"), "").unwrap();
        fs::write(temp.path().join("js_build/b.js"), "").unwrap();
        fs::write(temp.path().join("js_build/c.js"), "").unwrap();

        let removed = clean(&ctx, false, &sink()).unwrap();

        assert_eq!(removed, 1);
        assert!(temp.path().join("js_build/a.js").exists());
        assert!(temp.path().join("js_build/b.js").exists());
        assert!(!temp.path().join("js_build/c.js").exists());
    }

    #[test]
    fn test_clean_is_idempotent() {
        let (temp, ctx) = test_context();
        fs::write(temp.path().join("js_build/c.js"), "").unwrap();

        assert_eq!(clean(&ctx, false, &sink()).unwrap(), 1);
        assert_eq!(clean(&ctx, false, &sink()).unwrap(), 0);
    }

    #[test]
    fn test_fullclean_removes_everything() {
        let (temp, ctx) = test_context();
        fs::create_dir_all(temp.path().join("js_build/core")).unwrap();
        fs::write(temp.path().join("src/a.ts"), "").unwrap();
        fs::write(temp.path().join("js_build/a.js"), "").unwrap();
        fs::write(temp.path().join("js_build/core/b.js"), "").unwrap();

        let removed = clean(&ctx, true, &sink()).unwrap();

        assert_eq!(removed, 2);
        assert!(!temp.path().join("js_build/a.js").exists());
        assert!(!temp.path().join("js_build/core/b.js").exists());
    }

    #[test]
    fn test_clean_handles_nested_trees() {
        let (temp, ctx) = test_context();
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::create_dir_all(temp.path().join("js_build/core")).unwrap();
        fs::create_dir_all(temp.path().join("js_build/gone")).unwrap();
        fs::write(temp.path().join("src/core/math.ts"), "").unwrap();
        fs::write(temp.path().join("js_build/core/math.js"), "").unwrap();
        fs::write(temp.path().join("js_build/gone/old.js"), "").unwrap();

        clean(&ctx, false, &sink()).unwrap();

        assert!(temp.path().join("js_build/core/math.js").exists());
        assert!(!temp.path().join("js_build/gone/old.js").exists());
    }
}
