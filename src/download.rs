use crate::util::ensure_dir;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

/// Fetch `url` into `path` unless something is already there.
///
/// Returns `true` when a download happened. The status is checked before any
/// directory or file is created, but a body that fails midway leaves what was
/// written.
pub async fn download_if_needed(path: impl Into<PathBuf>, url: impl AsRef<str>) -> Result<bool> {
    let path = path.into();
    let url = url.as_ref();

    if fs::exists(&path)? {
        debug!("{} already present, skipping download", path.display());
        return Ok(false);
    }

    info!("Downloading {url} -> {}", path.display());

    let mut res = reqwest::get(url).await?.error_for_status()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let bar = progress_bar(res.content_length());

    if let Some(name) = path.file_name() {
        bar.set_message(name.to_string_lossy().into_owned());
    }

    let mut file = File::create(&path)?;

    while let Some(chunk) = res.chunk().await? {
        file.write_all(&chunk)?;
        bar.inc(chunk.len() as u64);
    }

    file.flush()?;
    bar.finish_and_clear();

    Ok(true)
}

fn progress_bar(len: Option<u64>) -> ProgressBar {
    match len {
        Some(len) => ProgressBar::new(len).with_style(
            ProgressStyle::default_bar()
                .progress_chars("=> ")
                .template("{msg} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        ),

        None => ProgressBar::new_spinner(),
    }
}
