//! Common utility functions shared across the codebase.

use std::{
    env,
    path::{Path, PathBuf},
};

/// Returns the current user's home directory from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(|var| env::var_os(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a leading `~`, or when no home directory is known, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use omt::utils::expand_home;
///
/// assert_eq!(expand_home("/srv/projects"), PathBuf::from("/srv/projects"));
/// assert_eq!(expand_home("relative/dir"), PathBuf::from("relative/dir"));
/// ```
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(['/', '\\']) => rest,
        _ => return PathBuf::from(path),
    };

    match (home_dir(), rest.trim_start_matches(['/', '\\'])) {
        (Some(home), "") => home,
        (Some(home), rest) => home.join(rest),
        (None, _) => PathBuf::from(path),
    }
}

/// Resolves `candidate` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, candidate: &str) -> PathBuf {
    let expanded = expand_home(candidate);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

/// Checks whether two paths point to the same file.
///
/// Falls back to a plain comparison when either path cannot be canonicalized
/// (for example because it does not exist yet).
pub fn is_same_path(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
