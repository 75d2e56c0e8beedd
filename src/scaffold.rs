//! Output scaffolding for sitebuild projects.
//!
//! Before any build runs, the required output locations must exist:
//! the public directory with its `js/` and `css/` subdirectories, empty
//! placeholder artifacts, the HTML entry page, the source directory, and
//! the intermediate compiled-output tree.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::context::BuildContext;
use crate::report::Reporter;

/// Error during scaffold creation. Fatal: the pipeline has no defined
/// behavior without its output locations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Failed to create directory
    #[error("Failed to create directory {0}: {1}")]
    CreateDir(String, #[source] std::io::Error),
    /// Failed to write file
    #[error("Failed to write file {0}: {1}")]
    WriteFile(String, #[source] std::io::Error),
}

/// Placeholder HTML page linking the two artifacts.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">

<head>
    <meta charset="UTF-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Document</title>
    <link rel="stylesheet" href="css/style.css">
</head>

<body>
    <script src="js/app.js"></script>
</body>

</html>"#;

/// Ensure all required directories and placeholder files exist.
///
/// Idempotent: existing paths are left untouched (placeholder content never
/// overwrites a real artifact) and produce no log output. Each newly created
/// path is logged with a `+ build` line.
pub fn ensure(ctx: &BuildContext, report: &Reporter) -> Result<(), ScaffoldError> {
    report.status("ensuring required paths exist");

    let public = ctx.public_dir();
    mkdir_if_absent(ctx, report, &public)?;
    mkdir_if_absent(ctx, report, &public.join("js"))?;
    mkdir_if_absent(ctx, report, &public.join("css"))?;
    write_if_absent(ctx, report, &ctx.script_artifact(), "")?;
    write_if_absent(ctx, report, &ctx.style_artifact(), "")?;
    write_if_absent(ctx, report, &public.join("index.html"), INDEX_HTML)?;

    mkdir_if_absent(ctx, report, &ctx.src_dir())?;
    mkdir_if_absent(ctx, report, &ctx.out_dir())?;

    Ok(())
}

fn mkdir_if_absent(ctx: &BuildContext, report: &Reporter, path: &Path) -> Result<(), ScaffoldError> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| ScaffoldError::CreateDir(ctx.relative(path), e))?;
        report.created(&ctx.relative(path));
    }
    Ok(())
}

fn write_if_absent(
    ctx: &BuildContext,
    report: &Reporter,
    path: &Path,
    content: &str,
) -> Result<(), ScaffoldError> {
    if !path.exists() {
        fs::write(path, content)
            .map_err(|e| ScaffoldError::WriteFile(ctx.relative(path), e))?;
        report.created(&ctx.relative(path));
    }
    Ok(())
}
