//! Core types for ListingGuard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Normalize a keyword for comparison: lowercase, surrounding whitespace removed
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// How a keyword was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Literally present in the prohibited list
    Exact,
    /// Within edit distance of a prohibited term
    Fuzzy,
    /// Matched one of the claim patterns
    Pattern,
    /// Nothing matched
    None,
}

impl MatchType {
    /// Stable lowercase name, used for metric labels and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Pattern => "pattern",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of analyzing a single keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    /// The keyword as supplied by the caller
    pub keyword: String,

    /// Whether the keyword should be kept out of a listing
    pub is_prohibited: bool,

    /// Severity score (0.0-1.0)
    pub score: f64,

    /// Confidence in the classification (0.0-1.0)
    pub confidence: f64,

    /// Which check produced the classification
    pub match_type: MatchType,

    /// Human-readable explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl KeywordAnalysis {
    /// Keyword found verbatim in the prohibited list
    pub fn exact(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            is_prohibited: true,
            score: 1.0,
            confidence: 1.0,
            match_type: MatchType::Exact,
            reason: Some("Exact match in prohibited keywords database".to_string()),
        }
    }

    /// Keyword close enough to a prohibited term
    pub fn fuzzy(keyword: impl Into<String>, similarity: f64, matched: &str) -> Self {
        Self {
            keyword: keyword.into(),
            is_prohibited: true,
            score: similarity,
            confidence: similarity,
            match_type: MatchType::Fuzzy,
            reason: Some(format!("Similar to prohibited keyword: {}", matched)),
        }
    }

    /// Keyword matched a claim pattern
    pub fn pattern(keyword: impl Into<String>, category: &str, score: f64) -> Self {
        Self {
            keyword: keyword.into(),
            is_prohibited: true,
            score,
            confidence: score,
            match_type: MatchType::Pattern,
            reason: Some(format!("Matches {} pattern", category)),
        }
    }

    /// Keyword passed every check
    pub fn clean(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            is_prohibited: false,
            score: 0.0,
            confidence: 1.0,
            match_type: MatchType::None,
            reason: None,
        }
    }
}

/// Snapshot of the prohibited-keyword list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProhibitedKeywordsDb {
    /// Prohibited terms in insertion order
    #[serde(default)]
    pub keywords: Vec<String>,

    /// When the list was last modified
    pub last_updated: DateTime<Utc>,
}

impl ProhibitedKeywordsDb {
    /// Create an empty list
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Create a list from the given terms, dropping blanks and duplicates
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut db = Self::empty();
        for keyword in keywords {
            let normalized = normalize_keyword(keyword.as_ref());
            if !normalized.is_empty() && !db.keywords.contains(&normalized) {
                db.keywords.push(normalized);
            }
        }
        db
    }

    /// Check whether a term is already listed
    pub fn contains(&self, term: &str) -> bool {
        let normalized = normalize_keyword(term);
        self.keywords
            .iter()
            .any(|k| normalize_keyword(k) == normalized)
    }

    /// Append a term unless it is already listed.
    ///
    /// Returns `true` if the list changed. `last_updated` only moves when it does.
    pub fn insert(&mut self, term: &str) -> Result<bool> {
        let normalized = normalize_keyword(term);
        if normalized.is_empty() {
            return Err(Error::invalid_keyword("prohibited keyword must not be blank"));
        }

        if self.contains(&normalized) {
            return Ok(false);
        }

        self.keywords.push(normalized);
        self.last_updated = Utc::now();
        Ok(true)
    }

    /// Number of listed terms
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for ProhibitedKeywordsDb {
    fn default() -> Self {
        Self::empty()
    }
}
