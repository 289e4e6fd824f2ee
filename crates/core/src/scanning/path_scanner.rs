use std::fs;
use std::path::{Path, PathBuf};

/// Lists the files of one directory whose name ends with a fixed suffix.
///
/// Mirrors a non-recursive `*.<ext>` glob: matching is case-sensitive,
/// hidden entries are skipped and subdirectories are never descended.
/// Results are sorted by file name.
pub struct PathScanner {
    suffix: String,
}

impl PathScanner {
    /// `extension` is given without the leading dot, e.g. `"jpg"`.
    pub fn new(extension: &str) -> Self {
        Self {
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }

    /// Returns matching paths, or an empty list if `dir` cannot be read.
    pub fn scan(&self, dir: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Cannot read source directory {}: {e}", dir.display());
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                    None
                }
            })
            .filter(|path| self.matches(path))
            .filter(|path| path.is_file())
            .collect();
        paths.sort();
        paths
    }

    fn matches(&self, path: &Path) -> bool {
        // Compared as bytes so non-UTF-8 names still match.
        path.file_name()
            .map(|name| name.as_encoded_bytes())
            .map(|name| !name.starts_with(b".") && name.ends_with(self.suffix.as_bytes()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"x").unwrap();
        path
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_finds_only_jpg_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.jpg");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "c.png");
        touch(dir.path(), "notes.txt");

        let found = PathScanner::new("jpg").scan(dir.path());
        assert_eq!(names(&found), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_returns_paths_rooted_at_directory() {
        let dir = tempfile::tempdir().unwrap();
        let expected = touch(dir.path(), "a.jpg");

        let found = PathScanner::new("jpg").scan(dir.path());
        assert_eq!(found, vec![expected]);
    }

    #[test]
    fn test_does_not_recurse() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "deep.jpg");
        touch(dir.path(), "top.jpg");

        let found = PathScanner::new("jpg").scan(dir.path());
        assert_eq!(names(&found), vec!["top.jpg"]);
    }

    #[test]
    fn test_skips_directory_named_like_image() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("album.jpg")).unwrap();

        assert!(PathScanner::new("jpg").scan(dir.path()).is_empty());
    }

    #[test]
    fn test_missing_directory_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert!(PathScanner::new("jpg").scan(&missing).is_empty());
    }

    #[test]
    fn test_empty_directory_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PathScanner::new("jpg").scan(dir.path()).is_empty());
    }

    #[test]
    fn test_leading_dot_in_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.jpg");

        assert_eq!(PathScanner::new(".jpg").scan(dir.path()).len(), 1);
    }

    #[cfg(target_os = "linux")]
    #[rstest]
    #[case::latin1_name(b"caf\xe9.jpg")]
    #[case::invalid_utf8_only(b"\xff\xfe.jpg")]
    fn test_matches_non_utf8_names(#[case] raw: &[u8]) {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(raw));
        fs::write(&path, b"x").unwrap();

        assert_eq!(PathScanner::new("jpg").scan(dir.path()), vec![path]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_skips_hidden_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b".caf\xe9.jpg")), b"x").unwrap();

        assert!(PathScanner::new("jpg").scan(dir.path()).is_empty());
    }

    #[rstest]
    #[case::uppercase("A.JPG")]
    #[case::jpeg_spelling("a.jpeg")]
    #[case::hidden(".a.jpg")]
    #[case::suffix_inside_name("a.jpg.bak")]
    fn test_ignores_non_matching_names(#[case] name: &str) {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), name);

        assert!(PathScanner::new("jpg").scan(dir.path()).is_empty());
    }
}
