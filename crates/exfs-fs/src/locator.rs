//! Upward file lookup bounded by the home directory
//!
//! Starting at the working directory, each directory is checked for the
//! requested entry before moving to its parent. The walk stops at the user's
//! home directory and never looks above it.
//!
//! Ascent is pure path computation; the process working directory is never
//! changed.

use std::fs;
use std::path::{Component, Path, PathBuf};

use exfs_core::paths::{depth_below, is_within};
use exfs_core::prelude::*;

/// Finds files in the working directory or one of its ancestors up to home.
#[derive(Debug, Clone, Default)]
pub struct UpwardLocator {
    /// Boundary directory; the user's home directory when `None`
    home: Option<PathBuf>,
}

impl UpwardLocator {
    /// Locator bounded by the user's home directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator bounded by `home` instead of the user's home directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }

    /// Find `file_name` starting from the current working directory.
    pub fn locate(&self, file_name: &str) -> Result<PathBuf> {
        let wd = std::env::current_dir()?;
        self.locate_from(file_name, &wd)
    }

    /// Find `file_name` starting from `start`.
    ///
    /// Both `start` and the boundary are canonicalized first so symlinked
    /// paths compare correctly.
    pub fn locate_from(&self, file_name: &str, start: &Path) -> Result<PathBuf> {
        let home = match &self.home {
            Some(home) => home.clone(),
            None => dirs::home_dir().ok_or(Error::HomeDirUnavailable)?,
        };
        let home = dunce::canonicalize(&home)
            .with_context(|| format!("Failed to resolve home directory {}", home.display()))?;
        let wd = dunce::canonicalize(start)
            .with_context(|| format!("Failed to resolve directory {}", start.display()))?;

        search_upward(file_name, &wd, &home, entry_exists)
    }
}

/// Walk from `wd` up to `home`, returning the first `dir/file_name` for which
/// `exists` holds.
///
/// `wd` and `home` must be absolute and normalized. Nearer directories are
/// always checked first, and at most `depth(wd) - depth(home) + 1` checks are
/// made.
///
/// # Errors
///
/// - [`Error::InvalidFileName`] if `file_name` is not a single plain component
/// - [`Error::OutsideHome`] if `wd` is not `home` or below it; no checks are made
/// - [`Error::FileNotFound`] if `home` was reached without a match
pub fn search_upward<F>(file_name: &str, wd: &Path, home: &Path, mut exists: F) -> Result<PathBuf>
where
    F: FnMut(&Path) -> bool,
{
    validate_file_name(file_name)?;

    if !is_within(wd, home) {
        return Err(Error::outside_home(wd));
    }
    trace!(
        "Searching up to {} directories for {}",
        depth_below(wd, home).unwrap_or(0) + 1,
        file_name
    );

    let mut cursor = wd;
    loop {
        let candidate = cursor.join(file_name);
        trace!("Checking {}", candidate.display());
        if exists(&candidate) {
            debug!("Found {}", candidate.display());
            return Ok(candidate);
        }

        if cursor == home {
            break;
        }

        match cursor.parent() {
            Some(parent) if is_within(parent, home) => cursor = parent,
            _ => break,
        }
    }

    debug!(
        "{} not found between {} and {}",
        file_name,
        wd.display(),
        home.display()
    );
    Err(Error::file_not_found(file_name))
}

/// Reject names that would escape the directory being checked
fn validate_file_name(file_name: &str) -> Result<()> {
    let mut components = Path::new(file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(Error::invalid_file_name(file_name)),
    }
}

/// Whether any entry exists at `path`, without following a final symlink
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Existence check over a fixed set of existing paths that records every check
    fn exists_in<'a>(
        existing: &'a [&'a str],
        checked: &'a mut Vec<PathBuf>,
    ) -> impl FnMut(&Path) -> bool + 'a {
        move |p: &Path| {
            checked.push(p.to_path_buf());
            existing.iter().any(|e| Path::new(e) == p)
        }
    }

    /// Switches the process working directory, restoring it on drop
    struct CurrentDirGuard {
        original: PathBuf,
    }

    impl CurrentDirGuard {
        fn enter(dir: &Path) -> Self {
            let original = std::env::current_dir().unwrap();
            std::env::set_current_dir(dir).unwrap();
            Self { original }
        }
    }

    impl Drop for CurrentDirGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.original);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pure Search Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_finds_in_ancestor_between_wd_and_home() {
        let mut checked = Vec::new();
        let found = search_upward(
            "x.txt",
            Path::new("/home/u/a/b"),
            Path::new("/home/u"),
            exists_in(&["/home/u/a/x.txt"], &mut checked),
        )
        .unwrap();

        assert_eq!(found, PathBuf::from("/home/u/a/x.txt"));
        assert_eq!(
            checked,
            vec![
                PathBuf::from("/home/u/a/b/x.txt"),
                PathBuf::from("/home/u/a/x.txt"),
            ]
        );
    }

    #[test]
    fn test_finds_in_wd_without_ascending() {
        let mut checked = Vec::new();
        let found = search_upward(
            "x.txt",
            Path::new("/home/u/a"),
            Path::new("/home/u"),
            exists_in(&["/home/u/a/x.txt", "/home/u/x.txt"], &mut checked),
        )
        .unwrap();

        assert_eq!(found, PathBuf::from("/home/u/a/x.txt"));
        assert_eq!(checked.len(), 1);
    }

    #[test]
    fn test_nearer_match_wins() {
        let mut checked = Vec::new();
        let found = search_upward(
            "cfg",
            Path::new("/home/u/a/b/c"),
            Path::new("/home/u"),
            exists_in(&["/home/u/cfg", "/home/u/a/b/cfg"], &mut checked),
        )
        .unwrap();

        assert_eq!(found, PathBuf::from("/home/u/a/b/cfg"));
    }

    #[test]
    fn test_finds_in_home() {
        let mut checked = Vec::new();
        let found = search_upward(
            "x.txt",
            Path::new("/home/u/a/b"),
            Path::new("/home/u"),
            exists_in(&["/home/u/x.txt"], &mut checked),
        )
        .unwrap();

        assert_eq!(found, PathBuf::from("/home/u/x.txt"));
        assert_eq!(checked.len(), 3);
    }

    #[test]
    fn test_not_found_stops_at_home() {
        let mut checked = Vec::new();
        let err = search_upward(
            "x.txt",
            Path::new("/home/u/a/b"),
            Path::new("/home/u"),
            exists_in(&["/home/x.txt", "/x.txt"], &mut checked),
        )
        .unwrap_err();

        assert!(matches!(err, Error::FileNotFound { ref name } if name == "x.txt"));
        assert_eq!(checked.last().unwrap(), &PathBuf::from("/home/u/x.txt"));
        assert_eq!(checked.len(), 3);
    }

    #[test]
    fn test_wd_equal_to_home_checks_once() {
        let mut checked = Vec::new();
        let err = search_upward(
            "x.txt",
            Path::new("/home/u"),
            Path::new("/home/u"),
            exists_in(&[], &mut checked),
        )
        .unwrap_err();

        assert!(matches!(err, Error::FileNotFound { .. }));
        assert_eq!(checked, vec![PathBuf::from("/home/u/x.txt")]);
    }

    #[test]
    fn test_outside_home_makes_no_checks() {
        let mut checked = Vec::new();
        let err = search_upward(
            "x.txt",
            Path::new("/tmp/work"),
            Path::new("/home/u"),
            exists_in(&["/tmp/work/x.txt"], &mut checked),
        )
        .unwrap_err();

        assert!(matches!(err, Error::OutsideHome { .. }));
        assert!(checked.is_empty());
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_outside_home() {
        let mut checked = Vec::new();
        let err = search_upward(
            "x.txt",
            Path::new("/home/user2/project"),
            Path::new("/home/user"),
            exists_in(&[], &mut checked),
        )
        .unwrap_err();

        assert!(matches!(err, Error::OutsideHome { .. }));
        assert!(checked.is_empty());
    }

    #[test]
    fn test_ancestor_of_home_is_outside_home() {
        let mut checked = Vec::new();
        let err = search_upward(
            "x.txt",
            Path::new("/home"),
            Path::new("/home/u"),
            exists_in(&[], &mut checked),
        )
        .unwrap_err();

        assert!(matches!(err, Error::OutsideHome { .. }));
    }

    #[test]
    fn test_invalid_file_names_rejected() {
        for name in ["", ".", "..", "a/b", "/etc/passwd"] {
            let mut checked = Vec::new();
            let err = search_upward(
                name,
                Path::new("/home/u"),
                Path::new("/home/u"),
                exists_in(&[], &mut checked),
            )
            .unwrap_err();

            assert!(
                matches!(err, Error::InvalidFileName { .. }),
                "expected InvalidFileName for {:?}, got {:?}",
                name,
                err
            );
            assert!(checked.is_empty());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filesystem Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_locate_from_real_directories() {
        let home = TempDir::new().unwrap();
        let nested = home.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(home.path().join("a").join("fl.txt"), "").unwrap();

        let locator = UpwardLocator::with_home(home.path());

        let found = locator.locate_from("fl.txt", &nested).unwrap();
        let expected = dunce::canonicalize(home.path()).unwrap().join("a").join("fl.txt");
        assert_eq!(found, expected);
    }

    #[test]
    fn test_locate_from_matches_directories() {
        let home = TempDir::new().unwrap();
        let nested = home.path().join("project").join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::create_dir_all(home.path().join("project").join(".git")).unwrap();

        let found = UpwardLocator::with_home(home.path())
            .locate_from(".git", &nested)
            .unwrap();
        assert!(found.ends_with("project/.git"));
    }

    #[test]
    fn test_locate_from_missing_file() {
        let home = TempDir::new().unwrap();
        let err = UpwardLocator::with_home(home.path())
            .locate_from("fl.txt", home.path())
            .unwrap_err();

        assert!(err.to_string().contains("did not find file"));
    }

    #[test]
    fn test_locate_from_missing_start_dir() {
        let home = TempDir::new().unwrap();
        let err = UpwardLocator::with_home(home.path())
            .locate_from("fl.txt", &home.path().join("gone"))
            .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_locate_from_outside_boundary() {
        let home = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();

        let err = UpwardLocator::with_home(home.path())
            .locate_from("fl.txt", elsewhere.path())
            .unwrap_err();

        assert!(matches!(err, Error::OutsideHome { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_counts_as_entry() {
        let home = TempDir::new().unwrap();
        std::os::unix::fs::symlink(home.path().join("nowhere"), home.path().join("link")).unwrap();

        let found = UpwardLocator::with_home(home.path())
            .locate_from("link", home.path())
            .unwrap();
        assert!(found.ends_with("link"));
    }

    #[test]
    #[serial]
    fn test_locate_uses_current_dir() {
        let home = TempDir::new().unwrap();
        let nested = home.path().join("mockDir");
        fs::create_dir_all(&nested).unwrap();
        fs::write(home.path().join("fl.txt"), "").unwrap();

        let _cwd = CurrentDirGuard::enter(&nested);
        let found = UpwardLocator::with_home(home.path()).locate("fl.txt").unwrap();
        assert!(found.ends_with("fl.txt"));
        assert_eq!(found.parent().unwrap(), dunce::canonicalize(home.path()).unwrap());
    }

    #[test]
    #[serial]
    fn test_current_dir_restored_after_panic() {
        let original = std::env::current_dir().unwrap();
        let dir = TempDir::new().unwrap();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _cwd = CurrentDirGuard::enter(dir.path());
            panic!("assertion failed inside the working directory");
        }));

        assert!(outcome.is_err());
        assert_eq!(std::env::current_dir().unwrap(), original);
    }
}
