//! File-backed persistence for the site document and visitor messages.
//!
//! Every write goes to a temp file in the target directory and is then
//! renamed over the destination, so readers only ever see a complete file.

mod json_store;

pub use json_store::*;

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::errors::AppError;

/// File holding the full site document.
pub const SITE_DATA_FILENAME: &str = "siteData.json";
/// File holding the visitor message collection.
pub const MESSAGES_FILENAME: &str = "messages.json";
/// Data directory used when no override is configured.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Resolve the data directory.
///
/// A configured directory is created when missing; failing to create it is
/// logged and the path is still returned so the first write reports the error.
pub fn resolve_data_dir(custom: Option<&Path>) -> PathBuf {
    match custom {
        Some(dir) => {
            if !dir.exists() {
                if let Err(e) = std::fs::create_dir_all(dir) {
                    tracing::error!(
                        "Failed to create custom data directory at {}: {}",
                        dir.display(),
                        e
                    );
                }
            }
            dir.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_DATA_DIR),
    }
}

/// Serialize `payload` as indented JSON and atomically replace `path` with it.
///
/// On failure the temp file is removed (best effort) and the original error is
/// returned; the previous contents of `path` are left untouched.
pub async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    payload: &T,
) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| io_error("create data directory", dir, e))?;

    let temp_path = temp_path_for(path);
    let result = write_then_rename(&temp_path, path, payload).await;

    if result.is_err() {
        if let Err(e) = tokio::fs::remove_file(&temp_path).await {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!("Failed to clean up {}: {}", temp_path.display(), e);
            }
        }
    }

    result
}

async fn write_then_rename<T: Serialize + ?Sized>(
    temp_path: &Path,
    path: &Path,
    payload: &T,
) -> Result<(), AppError> {
    let content = serde_json::to_vec_pretty(payload)
        .map_err(|e| AppError::Internal(format!("Failed to serialize {}: {}", path.display(), e)))?;

    let mut file = tokio::fs::File::create(temp_path)
        .await
        .map_err(|e| io_error("create temp file", temp_path, e))?;
    file.write_all(&content)
        .await
        .map_err(|e| io_error("write temp file", temp_path, e))?;
    file.sync_all()
        .await
        .map_err(|e| io_error("sync temp file", temp_path, e))?;
    drop(file);

    tokio::fs::rename(temp_path, path)
        .await
        .map_err(|e| io_error("replace", path, e))
}

/// Temp file next to `path`, named `<file>.<unix-millis>.<random>.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(
        "{}.{}.{}.tmp",
        file_name,
        Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4().simple()
    ))
}

fn io_error(action: &str, path: &Path, err: io::Error) -> AppError {
    tracing::error!("Failed to {} {}: {:?}", action, path.display(), err);
    AppError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use serde_json::json;
    use tempfile::TempDir;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    fn temp_files(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn test_resolve_default_dir() {
        assert_eq!(resolve_data_dir(None), PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_resolve_creates_custom_dir() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("volume").join("data");

        let resolved = resolve_data_dir(Some(&custom));

        assert_eq!(resolved, custom);
        assert!(custom.is_dir());
    }

    #[test]
    fn test_temp_path_stays_in_target_dir() {
        let target = Path::new("/srv/data/siteData.json");
        let temp = temp_path_for(target);
        assert_eq!(temp.parent(), target.parent());
        let name = temp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("siteData.json."));
        assert!(name.ends_with(".tmp"));
        assert_ne!(temp_path_for(target), temp);
    }

    #[tokio::test]
    async fn test_write_creates_directory_and_pretty_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("doc.json");

        write_json_atomic(&path, &json!({ "home": { "slogan": "hi" } }))
            .await
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"home\": {\n    \"slogan\": \"hi\"\n  }\n}");
        assert!(temp_files(path.parent().unwrap()).is_empty());
    }

    #[tokio::test]
    async fn test_serialize_failure_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        std::fs::write(&path, "{\"kept\":true}").unwrap();

        let result = write_json_atomic(&path, &Unserializable).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"kept\":true}");
        assert!(temp_files(temp_dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        // A non-empty directory at the destination makes the rename fail.
        let path = temp_dir.path().join("doc.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("inner"), "x").unwrap();

        let err = write_json_atomic(&path, &json!({ "a": 1 })).await.unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert!(path.is_dir());
        assert!(temp_files(temp_dir.path()).is_empty());
    }
}
