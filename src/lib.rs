//! Sitebuild - incremental build/watch pipeline for small front-end projects
//!
//! This library provides functionality to:
//! - Compile a tree of script source modules into an intermediate output tree
//! - Compile and minify a style source into a public stylesheet
//! - Bundle compiled modules into a single public script, in manifest order
//! - Watch the filesystem and re-run the relevant stage(s) on change

pub mod cli;
pub mod compile;
pub mod config;
pub mod context;
pub mod includes;
pub mod paths;
pub mod pipeline;
pub mod report;
pub mod scaffold;
pub mod stage;
pub mod watch;
