//! Keyword intelligence engine
//!
//! Checks run in strict priority order and the first hit wins:
//! 1. exact lookup in the prohibited list
//! 2. edit-distance similarity against every prohibited term
//! 3. claim patterns (superlative, promise, medical)
//!
//! The prohibited list is fetched once per call and shared by every keyword
//! in that call.

use crate::config::{EngineConfig, IntelligenceConfig};
use crate::levenshtein::levenshtein_similarity;
use crate::patterns::PatternSet;
use crate::store::{self, ProhibitedKeywords};
use crate::telemetry;
use listingguard_core::{normalize_keyword, KeywordAnalysis, MatchType, ProhibitedKeywordsDb, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Normalized view of a prohibited-keyword snapshot
#[derive(Debug, Clone, Default)]
pub struct ProhibitedIndex {
    terms: Vec<String>,
    lookup: HashSet<String>,
}

impl ProhibitedIndex {
    /// Build the index, dropping blank and repeated terms but keeping list order
    pub fn new(db: &ProhibitedKeywordsDb) -> Self {
        let mut index = Self::default();
        for keyword in &db.keywords {
            let term = normalize_keyword(keyword);
            if !term.is_empty() && index.lookup.insert(term.clone()) {
                index.terms.push(term);
            }
        }
        index
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.lookup.contains(normalized)
    }

    /// Most similar term and its similarity; ties keep the earliest term
    pub fn closest(&self, normalized: &str) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for term in &self.terms {
            let similarity = levenshtein_similarity(normalized, term);
            if best.map_or(true, |(_, s)| similarity > s) {
                best = Some((term.as_str(), similarity));
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Pure classifier: threshold plus pattern table, no I/O
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    fuzzy_threshold: f64,
    patterns: PatternSet,
}

impl KeywordMatcher {
    pub fn new(fuzzy_threshold: f64, patterns: PatternSet) -> Self {
        Self {
            fuzzy_threshold,
            patterns,
        }
    }

    /// Matcher with the default threshold and the built-in patterns
    pub fn builtin() -> Result<Self> {
        Self::from_config(&IntelligenceConfig::default())
    }

    pub fn from_config(config: &IntelligenceConfig) -> Result<Self> {
        let (fuzzy_threshold, patterns) = config.compile()?;
        Ok(Self::new(fuzzy_threshold, patterns))
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Classify one keyword against a prepared index
    pub fn classify(&self, keyword: &str, index: &ProhibitedIndex) -> KeywordAnalysis {
        let normalized = normalize_keyword(keyword);

        let analysis = if index.contains(&normalized) {
            KeywordAnalysis::exact(keyword)
        } else if let Some((term, similarity)) = index
            .closest(&normalized)
            .filter(|(_, similarity)| *similarity > self.fuzzy_threshold)
        {
            KeywordAnalysis::fuzzy(keyword, similarity, term)
        } else if let Some(pattern) = self.patterns.first_match(&normalized) {
            KeywordAnalysis::pattern(keyword, pattern.category(), pattern.score())
        } else {
            KeywordAnalysis::clean(keyword)
        };

        debug!(
            keyword = %normalized,
            match_type = %analysis.match_type,
            score = analysis.score,
            "Classified keyword"
        );
        telemetry::record_analysis(analysis.match_type);

        analysis
    }
}

/// Keyword screening engine backed by a prohibited-keyword store
pub struct KeywordIntelligence {
    store: Arc<dyn ProhibitedKeywords>,
    matcher: KeywordMatcher,
}

impl KeywordIntelligence {
    /// Create an engine with the default threshold and built-in patterns
    pub fn new(store: Arc<dyn ProhibitedKeywords>) -> Result<Self> {
        Ok(Self::with_matcher(store, KeywordMatcher::builtin()?))
    }

    pub fn with_config(store: Arc<dyn ProhibitedKeywords>, config: &IntelligenceConfig) -> Result<Self> {
        Ok(Self::with_matcher(store, KeywordMatcher::from_config(config)?))
    }

    pub fn with_matcher(store: Arc<dyn ProhibitedKeywords>, matcher: KeywordMatcher) -> Self {
        Self { store, matcher }
    }

    /// Build the store and the engine from a full configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let store = store::from_config(&config.store)?;
        Self::with_config(store, &config.intelligence)
    }

    pub fn matcher(&self) -> &KeywordMatcher {
        &self.matcher
    }

    pub fn store(&self) -> &Arc<dyn ProhibitedKeywords> {
        &self.store
    }

    /// Classify a single keyword. Fetches the prohibited list once.
    pub async fn analyze_keyword(&self, keyword: &str) -> Result<KeywordAnalysis> {
        let db = self.fetch().await?;
        let index = ProhibitedIndex::new(&db);
        Ok(self.matcher.classify(keyword, &index))
    }

    /// Classify every keyword, preserving input order.
    ///
    /// The list is fetched once for the whole batch. If the fetch fails the
    /// batch fails; no keyword is reported as clean by default.
    pub async fn analyze_batch<S: AsRef<str>>(&self, keywords: &[S]) -> Result<Vec<KeywordAnalysis>> {
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let start = Instant::now();
        let db = self.fetch().await?;
        let results = self.analyze_with_snapshot(keywords, &db);

        let summary = BatchSummary::from_results(&results);
        telemetry::record_batch_latency(start.elapsed().as_micros() as f64);
        info!(
            total = summary.total,
            prohibited = summary.prohibited,
            "Analyzed {} keywords against {} prohibited terms",
            summary.total,
            db.len()
        );

        Ok(results)
    }

    /// Classify against a caller-held snapshot without touching the store
    pub fn analyze_with_snapshot<S: AsRef<str>>(
        &self,
        keywords: &[S],
        db: &ProhibitedKeywordsDb,
    ) -> Vec<KeywordAnalysis> {
        let index = ProhibitedIndex::new(db);
        keywords
            .iter()
            .map(|keyword| self.matcher.classify(keyword.as_ref(), &index))
            .collect()
    }

    /// Add a term to the prohibited list
    pub async fn add_prohibited(&self, term: &str) -> Result<bool> {
        self.store.add(term).await
    }

    async fn fetch(&self) -> Result<ProhibitedKeywordsDb> {
        self.store.get_all().await.map_err(|e| {
            warn!("Failed to fetch prohibited keywords: {}", e);
            telemetry::record_fetch_error();
            e
        })
    }
}

/// Totals for a batch of analyses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub prohibited: usize,
    pub exact: usize,
    pub fuzzy: usize,
    pub pattern: usize,
    pub clean: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[KeywordAnalysis]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            if result.is_prohibited {
                summary.prohibited += 1;
            }
            match result.match_type {
                MatchType::Exact => summary.exact += 1,
                MatchType::Fuzzy => summary.fuzzy += 1,
                MatchType::Pattern => summary.pattern += 1,
                MatchType::None => summary.clean += 1,
            }
        }

        summary
    }
}
