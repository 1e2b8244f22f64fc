//! Prohibited-keyword stores
//!
//! The engine never reaches for a global list. It is handed a
//! [`ProhibitedKeywords`] implementation at construction and asks it for a
//! fresh snapshot whenever it classifies.

use crate::config::StoreConfig;
use async_trait::async_trait;
use listingguard_core::{Error, ProhibitedKeywordsDb, Result};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Source of the prohibited-keyword list
#[async_trait]
pub trait ProhibitedKeywords: Send + Sync {
    /// Fetch the full current list
    async fn get_all(&self) -> Result<ProhibitedKeywordsDb>;

    /// Append a term if absent and persist the list.
    ///
    /// Returns `true` if the term was added, `false` if it was already listed.
    async fn add(&self, term: &str) -> Result<bool>;
}

/// Build a store from configuration
pub fn from_config(config: &StoreConfig) -> Result<Arc<dyn ProhibitedKeywords>> {
    let store: Arc<dyn ProhibitedKeywords> = match config {
        StoreConfig::Memory { keywords } => Arc::new(MemoryStore::new(keywords)),
        StoreConfig::File { path } => Arc::new(FileStore::new(path)),
        StoreConfig::Remote { url, timeout_secs } => {
            Arc::new(RemoteStore::new(url, Duration::from_secs(*timeout_secs))?)
        }
    };

    Ok(store)
}

/// In-process list, for embedded lists and tests
pub struct MemoryStore {
    db: RwLock<ProhibitedKeywordsDb>,
}

impl MemoryStore {
    /// Create a store holding the given terms
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            db: RwLock::new(ProhibitedKeywordsDb::new(keywords)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            db: RwLock::new(ProhibitedKeywordsDb::empty()),
        }
    }
}

#[async_trait]
impl ProhibitedKeywords for MemoryStore {
    async fn get_all(&self) -> Result<ProhibitedKeywordsDb> {
        Ok(self.db.read().clone())
    }

    async fn add(&self, term: &str) -> Result<bool> {
        let added = self.db.write().insert(term)?;
        if added {
            info!("Added prohibited keyword: {}", term.trim());
        }
        Ok(added)
    }
}

/// JSON document on disk: `{"keywords": [...], "lastUpdated": "..."}`
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<ProhibitedKeywordsDb> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::data_source(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::data_source(format!("Malformed keyword list {}: {}", self.path.display(), e))
        })
    }

    async fn write(&self, db: &ProhibitedKeywordsDb) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // Readers never take the lock, so the list is replaced by rename
        // and is always either the old or the new document.
        let content = serde_json::to_string_pretty(db)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, content).await?;

        if let Err(e) = tokio::fs::rename(&staging, &self.path).await {
            warn!("Failed to replace {}: {}", self.path.display(), e);
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        Ok(())
    }

    /// Sibling file unique to this process, so the final rename stays on one filesystem
    fn staging_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "prohibited-keywords".to_string());

        self.path
            .with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
    }
}

#[async_trait]
impl ProhibitedKeywords for FileStore {
    async fn get_all(&self) -> Result<ProhibitedKeywordsDb> {
        let db = self.read().await?;
        debug!("Loaded {} prohibited keywords from {}", db.len(), self.path.display());
        Ok(db)
    }

    async fn add(&self, term: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut db = if tokio::fs::try_exists(&self.path).await? {
            self.read().await?
        } else {
            ProhibitedKeywordsDb::empty()
        };

        if !db.insert(term)? {
            return Ok(false);
        }

        self.write(&db).await?;
        info!("Added prohibited keyword to {}: {}", self.path.display(), term.trim());
        Ok(true)
    }
}

/// JSON document served over HTTP.
///
/// `GET <url>` returns the list; `add` fetches it, appends, and `PUT`s it back.
pub struct RemoteStore {
    client: reqwest::Client,
    url: String,
}

impl RemoteStore {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ProhibitedKeywords for RemoteStore {
    async fn get_all(&self) -> Result<ProhibitedKeywordsDb> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::data_source(format!("Failed to fetch {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Keyword list fetch from {} returned {}", self.url, status);
            return Err(Error::data_source(format!(
                "Fetching {} returned {}",
                self.url, status
            )));
        }

        let db: ProhibitedKeywordsDb = response.json().await.map_err(|e| {
            Error::data_source(format!("Malformed keyword list from {}: {}", self.url, e))
        })?;

        debug!("Fetched {} prohibited keywords from {}", db.len(), self.url);
        Ok(db)
    }

    async fn add(&self, term: &str) -> Result<bool> {
        let mut db = self.get_all().await?;
        if !db.insert(term)? {
            return Ok(false);
        }

        let response = self
            .client
            .put(&self.url)
            .json(&db)
            .send()
            .await
            .map_err(|e| Error::data_source(format!("Failed to update {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::data_source(format!(
                "Updating {} returned {}",
                self.url, status
            )));
        }

        info!("Added prohibited keyword to {}: {}", self.url, term.trim());
        Ok(true)
    }
}
