use std::path::{Path, PathBuf};

/// Returns the sanipro data directory.
///
/// `SANIPRO_HOME` wins when set, otherwise `~/.sanipro/`.
pub fn data_dir() -> PathBuf {
    if let Ok(custom) = std::env::var("SANIPRO_HOME") {
        if !custom.is_empty() {
            return PathBuf::from(custom);
        }
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".sanipro")
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
