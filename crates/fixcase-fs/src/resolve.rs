//! Case-insensitive path resolution against the working tree

use std::fs;
use std::path::Path;

use crate::NormalizedPath;

/// Ordinal case-insensitive name comparison.
///
/// A single per-character case-folding convention decides "same name" for a
/// directory-listing comparison; locale-aware collation is out of scope.
fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Find the entry of `dir` that case-insensitively matches `component`,
/// returning its actual on-disk name.
///
/// When several entries collide under case folding (possible on a
/// case-sensitive filesystem holding e.g. `a.txt` and `A.txt`), the
/// lexicographically smallest actual name wins, keeping resolution
/// independent of OS enumeration order. Listing failures and non-UTF-8
/// names are treated as "no match": index paths are UTF-8 strings and can
/// never equal a name that isn't.
pub fn find_entry(dir: &Path, component: &str) -> Option<String> {
    let entries = fs::read_dir(dir).ok()?;
    let mut found: Option<String> = None;

    for entry in entries.flatten() {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !names_match(&name, component) {
            continue;
        }
        match &found {
            Some(best) if *best <= name => {}
            _ => found = Some(name),
        }
    }

    found
}

/// Resolve the on-disk casing of `logical` by walking from `base` one
/// component at a time, adopting each directory entry's actual name.
///
/// When a component has no case-insensitive match the walk stops and the
/// result is a strict prefix of the requested depth; callers distinguish
/// that missing target from a full-depth resolution by comparing `depth()`.
/// The walk never fails: an unreadable directory reads as "no match".
pub fn resolve_casing(base: &Path, logical: &NormalizedPath) -> NormalizedPath {
    let mut dir = base.to_path_buf();
    let mut resolved = NormalizedPath::empty();

    for component in logical.components() {
        let Some(actual) = find_entry(&dir, component) else {
            tracing::debug!(path = %logical, component, "no case-insensitive match");
            break;
        };
        dir.push(&actual);
        resolved.push(&actual);
    }

    resolved
}
