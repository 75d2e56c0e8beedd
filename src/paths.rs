//! Path mapping between the source tree and the compiled tree.
//!
//! The convention is a pure extension swap: a source module at
//! `<src>/core/math.ts` compiles to `<out>/core/math.js` and back. The
//! mapping has two invariants: one source path maps to exactly one compiled
//! path, and the mapping is reversible (only the final extension changes).

use std::path::{Path, PathBuf};

/// Map a file under `from_root` to the mirrored location under `to_root`,
/// swapping the final extension for `to_ext`.
///
/// Returns `None` if `path` is not under `from_root`.
pub fn map_tree(path: &Path, from_root: &Path, to_root: &Path, to_ext: &str) -> Option<PathBuf> {
    let rel = path.strip_prefix(from_root).ok()?;
    let mut mapped = to_root.join(rel);
    mapped.set_extension(to_ext);
    Some(mapped)
}

/// Map a source module to its compiled counterpart in the intermediate tree.
pub fn compiled_from_source(
    source: &Path,
    src_root: &Path,
    out_root: &Path,
    compiled_ext: &str,
) -> Option<PathBuf> {
    map_tree(source, src_root, out_root, compiled_ext)
}

/// Map a compiled file back to the source path it must have come from.
pub fn source_from_compiled(
    compiled: &Path,
    out_root: &Path,
    src_root: &Path,
    source_ext: &str,
) -> Option<PathBuf> {
    map_tree(compiled, out_root, src_root, source_ext)
}

/// Check whether a path carries the given extension, case-insensitively.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
