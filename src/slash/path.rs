//! Slash manipulation helpers for URL paths.
//!
//! All helpers operate on `/` only. Backslashes and other characters are
//! left untouched, and interior runs of slashes are never collapsed.

/// Remove every leading and trailing `/`.
pub fn trim(path: &str) -> &str {
    path.trim_matches('/')
}

/// Remove every leading `/`.
pub fn trim_start(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Join two path fragments with exactly one `/` at the boundary.
///
/// Slashes elsewhere in either fragment are preserved, so
/// `join_trimming("/app/", "/api")` is `/app/api`.
pub fn join_trimming(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_start_matches('/');
    format!("{base}/{segment}")
}

/// Returns true when the final path segment carries an extension.
///
/// Follows the filesystem rule: the segment after the last `/` must contain
/// a `.` that is not its final character.
pub fn has_extension(path: &str) -> bool {
    let segment = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    match segment.rfind('.') {
        Some(dot) => dot + 1 < segment.len(),
        None => false,
    }
}

/// Wrap a path so it carries exactly one leading and one trailing slash.
///
/// A path that trims down to nothing becomes the root `/`.
pub fn wrap(path: &str) -> String {
    let trimmed = trim(path);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
