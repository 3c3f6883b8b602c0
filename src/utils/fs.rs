//! Filesystem helpers for reading inputs and writing generated files.
//!
//! - `normalize_path` - absolute path (canonicalize + fallback)
//! - `write_atomic` - ensure parent dir, write via temp file + rename

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first. Falls back to the path itself if absolute,
/// or joined onto the current directory if relative (the path may not exist
/// yet, e.g. an output file).
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Write `content` to `path` atomically.
///
/// The parent directory is created if absent. Content goes to a temporary
/// file in the same directory, which is then renamed over `path`, so the
/// target either keeps its old content or holds the full new content.
///
/// The replaced file keeps the permissions of the previous target; a new
/// file is world-readable (`0644` on Unix) so web servers can serve it.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create output directory {}", parent.display()))?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    temp.write_all(content)
        .and_then(|()| temp.flush())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let permissions = match std::fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(_) => default_permissions(temp.as_file())?,
    };
    temp.as_file()
        .set_permissions(permissions)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    Ok(())
}

/// Permissions for a freshly created output file.
#[cfg(unix)]
fn default_permissions(_file: &std::fs::File) -> Result<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(file: &std::fs::File) -> Result<std::fs::Permissions> {
    Ok(file.metadata()?.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("public/nested/sitemap.xml");

        write_atomic(&target, b"<urlset/>").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "<urlset/>");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("sitemap.xml");
        fs::write(&target, "old").unwrap();

        write_atomic(&target, b"new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        // No stray temp files left next to the target
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_existing_dir_is_fine() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out/sitemap.xml");
        fs::create_dir_all(dir.path().join("out")).unwrap();

        write_atomic(&target, b"a").unwrap();
        write_atomic(&target, b"b").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "b");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_new_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("sitemap.xml");

        write_atomic(&target, b"<urlset/>").unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("robots.txt");
        fs::write(&target, "old").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&target, b"new").unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn test_write_atomic_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("public");
        fs::write(&blocker, "not a dir").unwrap();

        let result = write_atomic(&blocker.join("sitemap.xml"), b"x");

        assert!(result.is_err());
    }
}
