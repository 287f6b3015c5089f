//! Contact submission storage backed by a flat JSON file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::ContactSubmission;

/// Repository for contact submission operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepo: Send + Sync {
    /// Append a submission to the store.
    async fn append(&self, submission: &ContactSubmission) -> Result<()>;

    /// All stored submissions, oldest first. A missing file reads as empty.
    async fn list(&self) -> Result<Vec<ContactSubmission>>;
}

/// JSON-file implementation of ContactRepo.
///
/// The whole store is a single pretty-printed JSON array. Appends are
/// read-modify-write, serialized behind a mutex so concurrent requests in
/// this process cannot lose writes. There is no schema versioning.
pub struct JsonFileContactRepo {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileContactRepo {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<ContactSubmission>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("corrupt contact store at {}", self.path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path.display())),
        }
    }
}

#[async_trait]
impl ContactRepo for JsonFileContactRepo {
    async fn append(&self, submission: &ContactSubmission) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let mut all = self.read_all().await?;
        all.push(submission.clone());

        let json = serde_json::to_vec_pretty(&all)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ContactSubmission>> {
        self.read_all().await
    }
}
