use std::path::{Path, PathBuf};

/// Resolve the project root that badge paths are relative to.
///
/// Priority:
/// 1. `--root` flag / `BADGEGEN_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.github/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_from(&cwd)
}

/// Steps 2-4 of [`resolve_root`], starting at `start`.
fn discover_from(start: &Path) -> PathBuf {
    find_upward(start, ".github")
        .or_else(|| find_upward(start, ".git"))
        .unwrap_or_else(|| start.to_path_buf())
}

/// First ancestor of `start` (inclusive) containing a directory named `marker`.
fn find_upward(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn finds_github_dir_from_subdirectory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".github")).unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_upward(&subdir, ".github").unwrap(), dir.path());
    }

    #[test]
    fn finds_git_dir_when_no_github() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        let subdir = dir.path().join("crates/app");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(discover_from(&subdir), dir.path());
    }

    #[test]
    fn github_dir_beats_git_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".github")).unwrap();
        let vendored = dir.path().join("vendor/lib");
        std::fs::create_dir_all(vendored.join(".git")).unwrap();
        let subdir = vendored.join("src");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(discover_from(&subdir), dir.path());
    }

    #[test]
    fn marker_file_is_not_a_match() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".github"), "").unwrap();
        assert_ne!(
            find_upward(dir.path(), ".github").as_deref(),
            Some(dir.path())
        );
    }
}
