//! File-backed store of extracted resume texts.
//!
//! On-disk shape: `{"texts": [...], "updatedAt": "<RFC3339>"}`. A missing file
//! reads as an empty store. Writes go to a sibling temp file and are renamed
//! into place, so readers never see a partial document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed resume text file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResumeTextFile {
    #[serde(default)]
    texts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone)]
pub struct ResumeTextStore {
    path: Arc<PathBuf>,
    /// Serializes read-modify-write cycles.
    write_lock: Arc<Mutex<()>>,
}

impl ResumeTextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored texts, oldest first.
    pub async fn load(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read_file().await?.texts)
    }

    /// Appends `texts` and returns how many were added.
    pub async fn append(&self, texts: Vec<String>) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut file = self.read_file().await?;
        let added = texts.len();
        file.texts.extend(texts);
        file.updated_at = Some(Utc::now());
        self.write_file(&file).await?;

        info!("Stored {added} resume text(s); {} total", file.texts.len());
        Ok(added)
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let file = ResumeTextFile {
            texts: Vec::new(),
            updated_at: Some(Utc::now()),
        };
        self.write_file(&file).await?;

        info!("Cleared stored resume texts");
        Ok(())
    }

    async fn read_file(&self) -> Result<ResumeTextFile, StoreError> {
        match tokio::fs::read(self.path.as_path()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ResumeTextFile::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_file(&self, file: &ResumeTextFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(file)?).await?;
        tokio::fs::rename(&tmp, self.path.as_path()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ResumeTextStore {
        ResumeTextStore::new(dir.path().join("data").join("resume_texts.json"))
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_creates_directory_and_accumulates() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.append(vec!["first".into()]).await.unwrap(), 1);
        assert_eq!(
            store
                .append(vec!["second".into(), "third".into()])
                .await
                .unwrap(),
            2
        );
        assert_eq!(store.load().await.unwrap(), ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_file_uses_camel_case_timestamp() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(vec!["resume".into()]).await.unwrap();

        let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["texts"][0], "resume");
        assert!(value["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_reads_file_without_timestamp() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), r#"{"texts":["legacy"]}"#)
            .await
            .unwrap();
        assert_eq!(store.load().await.unwrap(), ["legacy"]);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::create_dir_all(store.path().parent().unwrap())
            .await
            .unwrap();
        tokio::fs::write(store.path(), "not json").await.unwrap();
        assert!(matches!(store.load().await, Err(StoreError::Json(_))));
    }

    #[tokio::test]
    async fn test_clear_empties_store() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.append(vec!["a".into(), "b".into()]).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(vec![format!("resume {i}")]).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load().await.unwrap().len(), 8);
    }
}
