//! Module include resolution.
//!
//! The application entry point declares the bundle order in a manifest: one
//! module identifier per line. The manifest is re-read from disk on every
//! script rebuild; its insertion order is authoritative for the bundle.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::context::BuildContext;
use crate::report::Reporter;

/// The ordered list of compiled files to bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIncludes {
    /// Existing compiled module paths, in manifest order
    pub files: Vec<PathBuf>,
    /// How many manifest entries resolved to an existing file
    pub resolved: usize,
}

/// Parse manifest text into an ordered, deduplicated list of module
/// identifiers.
///
/// Lines are split on `\n`, tolerating `\r\n` endings. A line is discarded if
/// it is empty or contains a `//` comment marker. Surrounding single quotes
/// are stripped. Duplicates collapse to the first occurrence.
pub fn parse_manifest(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for line in text.split('\n') {
        let line = line.trim_end_matches('\r');
        if line.contains("//") {
            continue;
        }
        let entry = line.trim().trim_matches('\'').trim();
        if entry.is_empty() {
            continue;
        }
        if seen.insert(entry.to_string()) {
            entries.push(entry.to_string());
        }
    }

    entries
}

/// Resolve the manifest against the intermediate output tree.
///
/// Each entry maps to `<out>/<entry>.<compiled-ext>`; entries whose compiled
/// module does not exist are silently dropped (treated as not yet built, not
/// as an error). A missing manifest file resolves to nothing, which is a
/// valid state during early scaffolding.
pub fn resolve_includes(ctx: &BuildContext, report: &Reporter) -> io::Result<ResolvedIncludes> {
    let text = match fs::read_to_string(ctx.manifest_path()) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    let out_dir = ctx.out_dir();
    let files: Vec<PathBuf> = parse_manifest(&text)
        .iter()
        .map(|entry| out_dir.join(format!("{}.{}", entry, ctx.compiled_ext())))
        .filter(|path| path.is_file())
        .collect();

    let resolved = files.len();
    report.merged(resolved);

    Ok(ResolvedIncludes { files, resolved })
}
