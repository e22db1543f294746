//! Atomic file writes for generated pages and the design analysis document.
//!
//! A run that is interrupted or fails half way must never leave a truncated
//! `index.html` or `design_analysis.json` behind. Every write goes to a
//! sibling temp file (`.{name}.tmp`), is fsynced, and is then renamed over
//! the target. `std::fs::rename` replaces an existing target on every
//! supported platform, so the target is either the old content or the new
//! content.

use crate::error::{CcuxError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to `path`, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| CcuxError::io("create directory", parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CcuxError::io("replace", path, e)
    })?;

    #[cfg(unix)]
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        })
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Atomically write a string to `path`.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CcuxError::UserError(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| CcuxError::io("create", path, e))?;

    let result = file.write_all(content).and_then(|_| file.sync_all());
    if let Err(e) = result {
        let _ = fs::remove_file(path);
        return Err(CcuxError::io("write", path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_page() {
        let temp_dir = TempDir::new().unwrap();
        let page = temp_dir.path().join("index.html");

        atomic_write_file(&page, "<!DOCTYPE html><html></html>").unwrap();

        assert_eq!(
            fs::read_to_string(&page).unwrap(),
            "<!DOCTYPE html><html></html>"
        );
    }

    #[test]
    fn replaces_existing_analysis() {
        let temp_dir = TempDir::new().unwrap();
        let analysis = temp_dir.path().join("design_analysis.json");
        fs::write(&analysis, "{\"theme\":\"minimal\"}").unwrap();

        atomic_write_file(&analysis, "{\"theme\":\"brutalist\"}").unwrap();

        assert_eq!(
            fs::read_to_string(&analysis).unwrap(),
            "{\"theme\":\"brutalist\"}"
        );
    }

    #[test]
    fn creates_missing_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let page = temp_dir.path().join("output3").join("index.html");

        atomic_write(&page, b"<html></html>").unwrap();

        assert!(page.exists());
    }

    #[test]
    fn leaves_no_temp_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let page = temp_dir.path().join("App.jsx");

        atomic_write(&page, b"export default function App() {}").unwrap();

        assert!(!temp_dir.path().join(".App.jsx.tmp").exists());
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/projects/output/index.html")).unwrap();
        assert_eq!(temp, Path::new("/projects/output/.index.html.tmp"));
    }

    #[test]
    fn empty_content_is_written() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("debug_output.txt");

        atomic_write(&file, b"").unwrap();

        assert!(fs::read(&file).unwrap().is_empty());
    }
}
