use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::{LintError, Result};

/// Collects the stylesheet files under `root`.
///
/// A file passed directly is returned as-is whatever its extension. Directories
/// are walked recursively and filtered by `extensions`; the result is sorted so
/// that runs are deterministic.
pub fn discover_files<P: AsRef<Path>>(root: P, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| LintError::Walk {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !has_extension(path, extensions) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|wanted| wanted == ext))
        .unwrap_or(false)
}
