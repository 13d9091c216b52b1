//! Input Resolver
//!
//! Turns a user-supplied string (filesystem path or http/https URI) into a
//! local path a converter can open. Remote inputs are downloaded into a named
//! temporary file whose extension is derived from the URI path with the query
//! string stripped. The returned `ResolvedInput` owns that file: it is
//! removed when the value is dropped, so a download lives exactly as long as
//! the conversion that uses it.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const DOWNLOAD_USER_AGENT: &str = "aerodoc-docs/0.2";
const DEFAULT_EXTENSION: &str = ".tmp";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("download failed: {0}")]
    Download(#[from] reqwest::Error),
    #[error("could not store download: {0}")]
    Io(#[from] std::io::Error),
}

/// A local path usable by a converter.
pub enum ResolvedInput {
    /// The input already named a local file.
    Local(PathBuf),
    /// The input was remote; the temp file is removed on drop.
    Downloaded(NamedTempFile),
}

impl ResolvedInput {
    pub fn path(&self) -> &Path {
        match self {
            ResolvedInput::Local(path) => path,
            ResolvedInput::Downloaded(file) => file.path(),
        }
    }
}

pub async fn resolve(input: &str) -> Result<ResolvedInput, ResolveError> {
    if input.starts_with("http://") || input.starts_with("https://") {
        return Ok(ResolvedInput::Downloaded(download(input).await?));
    }
    Ok(ResolvedInput::Local(expand_home(input)))
}

async fn download(url: &str) -> Result<NamedTempFile, ResolveError> {
    info!(%url, "Downloading remote document");

    let client = reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .user_agent(DOWNLOAD_USER_AGENT)
        .build()?;
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let mut file = tempfile::Builder::new()
        .prefix("aerodoc-")
        .suffix(&extension_for_url(url))
        .tempfile()?;
    file.write_all(&body)?;

    info!(path = %file.path().display(), "Stored temporary download");
    Ok(file)
}

/// Derive a file extension (with leading dot) from the URI's path component,
/// ignoring the query string. Defaults to `.tmp`.
fn extension_for_url(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or(url);
    let name = without_query.rsplit('/').next().unwrap_or(without_query);
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => name[idx..].to_string(),
        _ => DEFAULT_EXTENSION.to_string(),
    }
}

/// Expand a leading `~` to the user's home directory; other paths pass
/// through unchanged.
fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
