//! Pipeline orchestration.
//!
//! The full pipeline runs ensure → style → script → clean → resolve → bundle,
//! in that order. The ordering is load-bearing: clean needs the script stage
//! to have produced current compiled state, resolution needs clean to have
//! removed stale files, and the bundler needs resolution's ordered list.

use thiserror::Error;

use crate::compile::{
    LightningStyleCompiler, RefScriptCompiler, ScriptCompiler, StyleCompiler,
};
use crate::context::BuildContext;
use crate::includes;
use crate::report::Reporter;
use crate::scaffold::{self, ScaffoldError};
use crate::stage;

/// Fatal pipeline failure. Compiler-level problems never surface here; they
/// are logged by the stage that observed them.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Scaffold creation failed
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),
    /// Filesystem failure outside the compiler boundary
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The build pipeline: context, reporter, and the two external compilers.
pub struct Pipeline {
    context: BuildContext,
    report: Reporter,
    script: Box<dyn ScriptCompiler>,
    style: Box<dyn StyleCompiler>,
}

impl Pipeline {
    /// Create a pipeline with the built-in compilers.
    pub fn new(context: BuildContext, report: Reporter) -> Self {
        Self {
            context,
            report,
            script: Box::new(RefScriptCompiler::new()),
            style: Box::new(LightningStyleCompiler::new()),
        }
    }

    /// Replace the compilers, for tests or alternative toolchains.
    pub fn with_compilers(
        mut self,
        script: Box<dyn ScriptCompiler>,
        style: Box<dyn StyleCompiler>,
    ) -> Self {
        self.script = script;
        self.style = style;
        self
    }

    /// Get the build context.
    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    /// Get the reporter.
    pub fn report(&self) -> &Reporter {
        &self.report
    }

    /// Run the full pipeline once.
    pub fn build(&self) -> Result<(), PipelineError> {
        self.report.status("start building: css, js");
        scaffold::ensure(&self.context, &self.report)?;
        stage::build_style(&self.context, self.style.as_ref(), &self.report)?;
        self.script_rebuild()
    }

    /// Run the script-side unit: compile → clean → resolve → bundle.
    ///
    /// This is the whole reaction to a script-file change; style changes
    /// never trigger it (the two artifact pipelines are independent).
    pub fn script_rebuild(&self) -> Result<(), PipelineError> {
        stage::build_script(&self.context, self.script.as_ref(), &self.report)?;
        stage::clean(&self.context, false, &self.report)?;
        let resolved = includes::resolve_includes(&self.context, &self.report)?;
        stage::bundle(&self.context, &resolved.files, &self.report)?;
        Ok(())
    }

    /// Re-run only the style stage.
    pub fn style_rebuild(&self) -> Result<(), PipelineError> {
        stage::build_style(&self.context, self.style.as_ref(), &self.report)?;
        Ok(())
    }

    /// Remove stale (or, with `all`, every) compiled file from the
    /// intermediate tree. Returns the number of files removed.
    pub fn clean(&self, all: bool) -> Result<usize, PipelineError> {
        Ok(stage::clean(&self.context, all, &self.report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use std::fs;
    use tempfile::TempDir;

    fn test_pipeline() -> (TempDir, Pipeline) {
        let temp = TempDir::new().unwrap();
        let ctx = BuildContext::new(default_config(), temp.path().to_path_buf());
        let pipeline = Pipeline::new(ctx, Reporter::with_output(std::io::sink()));
        (temp, pipeline)
    }

    #[test]
    fn test_build_from_empty_project() {
        let (temp, pipeline) = test_pipeline();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("style.scss"), "body { margin: 0; }").unwrap();

        pipeline.build().unwrap();

        // Empty manifest: the bundle is an empty artifact, which is valid
        assert_eq!(fs::read_to_string(temp.path().join("public/js/app.js")).unwrap(), "");
        assert!(fs::read_to_string(temp.path().join("public/css/style.css"))
            .unwrap()
            .contains("body"));
    }

    #[test]
    fn test_build_bundles_in_manifest_order() {
        let (temp, pipeline) = test_pipeline();
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::write(temp.path().join("src/core/math.ts"), "MATH\n").unwrap();
        fs::write(temp.path().join("src/core/dom.ts"), "DOM\n").unwrap();
        fs::write(temp.path().join("src/app.ts"), "'core/dom'\n'core/math'\n").unwrap();
        fs::write(temp.path().join("style.scss"), "").unwrap();

        pipeline.build().unwrap();

        let bundle = fs::read_to_string(temp.path().join("public/js/app.js")).unwrap();
        assert_eq!(bundle, "DOM\nMATH\n");
    }

    #[test]
    fn test_script_rebuild_reconciles_deleted_source() {
        let (temp, pipeline) = test_pipeline();
        fs::create_dir_all(temp.path().join("src/core")).unwrap();
        fs::write(temp.path().join("src/core/math.ts"), "MATH\n").unwrap();
        fs::write(temp.path().join("src/app.ts"), "'core/math'\n").unwrap();
        fs::write(temp.path().join("style.scss"), "").unwrap();
        pipeline.build().unwrap();
        assert!(temp.path().join("js_build/core/math.js").exists());

        // Delete the source; the next script rebuild drops its compiled
        // output and the bundle entry
        fs::remove_file(temp.path().join("src/core/math.ts")).unwrap();
        pipeline.script_rebuild().unwrap();

        assert!(!temp.path().join("js_build/core/math.js").exists());
        assert_eq!(fs::read_to_string(temp.path().join("public/js/app.js")).unwrap(), "");
    }

    #[test]
    fn test_clean_all() {
        let (temp, pipeline) = test_pipeline();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/a.ts"), "A\n").unwrap();
        fs::write(temp.path().join("style.scss"), "").unwrap();
        pipeline.build().unwrap();
        assert!(temp.path().join("js_build/a.js").exists());

        let removed = pipeline.clean(true).unwrap();
        assert!(removed >= 1);
        assert!(!temp.path().join("js_build/a.js").exists());
    }
}
