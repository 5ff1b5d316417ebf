//! Path boundary helpers

use std::path::Path;

/// Whether `path` is `boundary` itself or lies beneath it.
///
/// Comparison is per path component, so `/home/user2` is not inside
/// `/home/user`. Both paths are expected to be absolute and normalized.
pub fn is_within(path: &Path, boundary: &Path) -> bool {
    path.starts_with(boundary)
}

/// Number of ascents needed to get from `path` up to `boundary`.
///
/// Returns `None` when `path` is not within `boundary`.
pub fn depth_below(path: &Path, boundary: &Path) -> Option<usize> {
    path.strip_prefix(boundary)
        .ok()
        .map(|rest| rest.components().count())
}
