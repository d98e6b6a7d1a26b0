use anyhow::Result;
use std::{fs, path::PathBuf};

/// Make sure `path` exists, creating it and any missing parents as directories.
///
/// Anything already at `path` counts, files included.
pub fn ensure_dir(path: impl Into<PathBuf>) -> Result<()> {
    let path = path.into();

    if fs::exists(&path)? {
        debug!("{} already exists", path.display());
        return Ok(());
    }

    fs::create_dir_all(&path)?;
    info!("Created directory {}", path.display());

    Ok(())
}

pub fn make_path_and_create(path: impl Into<PathBuf>) -> Result<PathBuf> {
    let path = path.into();

    ensure_dir(&path)?;
    Ok(path)
}
