use crate::errors::AppError;
use crate::models::AppData;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Reads the data file. A missing or unreadable file starts an empty log.
pub async fn load_data(path: &Path) -> AppData {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return AppData::default(),
        Err(err) => {
            error!(path = %path.display(), "cannot read data file: {err}");
            return AppData::default();
        }
    };

    serde_json::from_slice::<AppData>(&bytes)
        .inspect(|data| {
            info!(
                activities = data.activities.len(),
                events = data.events.len(),
                path = %path.display(),
                "data file loaded"
            )
        })
        .unwrap_or_else(|err| {
            error!(path = %path.display(), "data file is not valid JSON: {err}");
            AppData::default()
        })
}

/// Writes `data` beside `path` first and renames it into place, so a failed
/// write never truncates the previous file.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let staging = staging_path(path);
    fs::write(&staging, payload).await?;
    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(err.into());
    }
    Ok(())
}

/// Persists `next` and only then swaps it into `current`. On error `current`
/// is left exactly as it was.
pub async fn commit(path: &Path, current: &mut AppData, next: AppData) -> Result<(), AppError> {
    persist_data(path, &next).await.inspect_err(|err| {
        error!(path = %path.display(), "data file not saved: {}", err.message);
    })?;
    *current = next;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
