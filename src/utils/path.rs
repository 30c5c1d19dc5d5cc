//! Path utilities: expand ~ and read extensions.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str()
        && s.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(s.trim_start_matches("~/"));
    }
    path.to_path_buf()
}

/// Lower-case extension, empty when there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
