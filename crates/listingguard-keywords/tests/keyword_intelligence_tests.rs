//! Integration tests for keyword intelligence
//!
//! Uses mock stores to observe how often the prohibited list is fetched and
//! how fetch failures surface to callers.

use async_trait::async_trait;
use listingguard_core::{Error, MatchType, ProhibitedKeywordsDb, Result};
use listingguard_keywords::{FileStore, KeywordIntelligence, MemoryStore, ProhibitedKeywords};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A store that counts fetches
struct CountingStore {
    inner: MemoryStore,
    fetches: AtomicU32,
}

impl CountingStore {
    fn new(keywords: &[&str]) -> Self {
        Self {
            inner: MemoryStore::new(keywords),
            fetches: AtomicU32::new(0),
        }
    }

    fn fetches(&self) -> u32 {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ProhibitedKeywords for CountingStore {
    async fn get_all(&self) -> Result<ProhibitedKeywordsDb> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.inner.get_all().await
    }

    async fn add(&self, term: &str) -> Result<bool> {
        self.inner.add(term).await
    }
}

/// A store whose backend is always down
struct FailingStore;

#[async_trait]
impl ProhibitedKeywords for FailingStore {
    async fn get_all(&self) -> Result<ProhibitedKeywordsDb> {
        Err(Error::data_source("simulated outage"))
    }

    async fn add(&self, _term: &str) -> Result<bool> {
        Err(Error::data_source("simulated outage"))
    }
}

#[tokio::test]
async fn test_batch_fetches_once() {
    let store = Arc::new(CountingStore::new(&["counterfeit", "replica"]));
    let engine = KeywordIntelligence::new(store.clone()).unwrap();

    let keywords = vec!["replica", "counterfit", "best price", "garden hose"];
    let results = engine.analyze_batch(&keywords).await.unwrap();

    assert_eq!(store.fetches(), 1);
    let types: Vec<_> = results.iter().map(|r| r.match_type).collect();
    assert_eq!(
        types,
        vec![MatchType::Exact, MatchType::Fuzzy, MatchType::Pattern, MatchType::None]
    );
}

#[tokio::test]
async fn test_single_keyword_fetches_each_call() {
    let store = Arc::new(CountingStore::new(&["fake"]));
    let engine = KeywordIntelligence::new(store.clone()).unwrap();

    engine.analyze_keyword("fake").await.unwrap();
    engine.analyze_keyword("fake").await.unwrap();
    assert_eq!(store.fetches(), 2);
}

#[tokio::test]
async fn test_empty_batch_skips_fetch() {
    let store = Arc::new(CountingStore::new(&["fake"]));
    let engine = KeywordIntelligence::new(store.clone()).unwrap();

    let results = engine.analyze_batch::<&str>(&[]).await.unwrap();
    assert!(results.is_empty());
    assert_eq!(store.fetches(), 0);
}

#[tokio::test]
async fn test_snapshot_analysis_skips_fetch() {
    let store = Arc::new(CountingStore::new(&[]));
    let engine = KeywordIntelligence::new(store.clone()).unwrap();
    let snapshot = ProhibitedKeywordsDb::new(["knockoff"]);

    let results = engine.analyze_with_snapshot(&["Knockoff", "tote bag"], &snapshot);
    assert_eq!(results[0].match_type, MatchType::Exact);
    assert_eq!(results[1].match_type, MatchType::None);
    assert_eq!(store.fetches(), 0);
}

#[tokio::test]
async fn test_fetch_failure_propagates() {
    let engine = KeywordIntelligence::new(Arc::new(FailingStore)).unwrap();

    let err = engine.analyze_keyword("anything").await.unwrap_err();
    assert!(err.is_data_source());

    let err = engine.analyze_batch(&["a", "b"]).await.unwrap_err();
    assert!(err.is_data_source());

    assert!(engine.add_prohibited("term").await.is_err());
}

#[tokio::test]
async fn test_results_serialize_for_ui() {
    let engine = KeywordIntelligence::new(Arc::new(MemoryStore::new(["replica"]))).unwrap();

    let results = engine.analyze_batch(&["replica", "lifetime warranty"]).await.unwrap();
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json[0]["matchType"], "exact");
    assert_eq!(json[1]["matchType"], "pattern");
    assert_eq!(json[1]["reason"], "Matches promise pattern");
}

#[tokio::test]
async fn test_file_backed_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prohibited.json");
    std::fs::write(
        &path,
        r#"{"keywords": ["Counterfeit"], "lastUpdated": "2024-01-15T08:30:00Z"}"#,
    )
    .unwrap();

    let engine = KeywordIntelligence::new(Arc::new(FileStore::new(&path))).unwrap();

    let result = engine.analyze_keyword("counterfeit").await.unwrap();
    assert_eq!(result.match_type, MatchType::Exact);

    assert!(engine.add_prohibited("replica").await.unwrap());
    let result = engine.analyze_keyword("REPLICA").await.unwrap();
    assert_eq!(result.match_type, MatchType::Exact);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_batches() {
    let engine = Arc::new(KeywordIntelligence::new(Arc::new(MemoryStore::new(["fake"]))).unwrap());

    let mut handles = Vec::new();
    for i in 0..8 {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            let keywords = vec![format!("widget {}", i), "fake".to_string()];
            engine.analyze_batch(&keywords).await
        }));
    }

    for handle in handles {
        let results = handle.await.unwrap().unwrap();
        assert_eq!(results[0].match_type, MatchType::None);
        assert_eq!(results[1].match_type, MatchType::Exact);
    }
}
