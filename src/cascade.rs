use crate::download::download_if_needed;
use anyhow::Result;
use std::path::PathBuf;

pub const HAARCASCADE_URL: &str = "https://raw.githubusercontent.com/opencv/opencv/master/data/haarcascades/haarcascade_frontalface_default.xml";

/// Where the cascade lands when no path is given, relative to the working directory.
pub const DEFAULT_CASCADE_PATH: &str = "haarcascade_frontalface_default.xml";

/// Make sure a file exists at `path`, fetching `url` into it if not, and hand
/// the path back unchanged. The contents are never checked.
pub async fn ensure_asset(path: impl Into<PathBuf>, url: impl AsRef<str>) -> Result<PathBuf> {
    let path = path.into();

    download_if_needed(&path, url).await?;

    Ok(path)
}

/// Make sure the frontal face Haar cascade is present at `cascade_path`.
pub async fn ensure_haarcascade(cascade_path: impl Into<PathBuf>) -> Result<PathBuf> {
    ensure_asset(cascade_path, HAARCASCADE_URL).await
}

pub async fn ensure_default_haarcascade() -> Result<PathBuf> {
    ensure_haarcascade(DEFAULT_CASCADE_PATH).await
}
