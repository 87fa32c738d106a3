use crate::error::{BadgeError, Result};
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode given to newly created files, matching a plain `open` under the usual 022 umask.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Atomically write `data` to `path` using a tempfile in the same directory.
/// Any existing file at `path` is replaced and keeps its permissions.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    if let Some(perms) = target_permissions(path)? {
        tmp.as_file().set_permissions(perms)?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Permissions the written file should end up with: those of the file being
/// replaced, otherwise the default mode for new files.
fn target_permissions(path: &Path) -> Result<Option<Permissions>> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(default_permissions()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write a file only if it does not already exist. Returns true if written.
pub fn write_if_missing(path: &Path, data: &[u8]) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    atomic_write(path, data)?;
    Ok(true)
}

/// Read a UTF-8 input file. Every failure names the path.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BadgeError::MissingInput {
            path: path.to_path_buf(),
        },
        _ => BadgeError::ReadInput {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("badge.svg");
        atomic_write(&path, b"<svg/>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".github/badges/date_gen.svg");
        atomic_write(&path, b"data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn atomic_write_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.svg");
        std::fs::write(&path, "a much longer previous body").unwrap();
        atomic_write(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_if_missing_skips_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("iteration.txt");
        std::fs::write(&path, b"7").unwrap();
        let written = write_if_missing(&path, b"1").unwrap();
        assert!(!written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "7");
    }

    #[test]
    fn read_input_names_non_utf8_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("iteration.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_input(&path).unwrap_err();
        assert!(matches!(err, BadgeError::ReadInput { .. }));
        assert!(err.to_string().contains("iteration.txt"), "{err}");
    }

    #[test]
    fn read_input_names_directory_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("date.svg");
        std::fs::create_dir(&path).unwrap();
        let err = read_input(&path).unwrap_err();
        assert!(err.to_string().contains("date.svg"), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_world_readable() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("date_gen.svg");
        atomic_write(&path, b"<svg/>").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("iteration_gen.svg");
        std::fs::write(&path, "old").unwrap();
        std::fs::set_permissions(&path, Permissions::from_mode(0o664)).unwrap();
        atomic_write(&path, b"new").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o664);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn read_input_reports_missing_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        match read_input(&path) {
            Err(BadgeError::MissingInput { path: p }) => assert_eq!(p, path),
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }
}
