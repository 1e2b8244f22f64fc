//! Claim patterns that flag keywords without a prohibited-list hit

use listingguard_core::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Superlative claims: "best", "#1", "50% off"
pub const SUPERLATIVE_PATTERN: &str =
    r"(?:\b(?:best|top|cheapest|greatest|number\s+one)\b|#1\b|\b\d+\s*%\s*off\b)";

/// Promise claims: guarantees, warranties, refunds
pub const PROMISE_PATTERN: &str = r"\b(?:guarantee[ds]?|warranty|lifetime|money[\s-]*back)\b";

/// Medical claims
pub const MEDICAL_PATTERN: &str = r"\b(?:cure[ds]?|treat(?:s|ment)?|prevent(?:s|ion)?|heal(?:s|ing)?)\b";

/// A compiled claim pattern
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    pattern: Regex,
    category: String,
    score: f64,
}

impl KeywordPattern {
    /// Compile a case-insensitive pattern
    pub fn new(pattern: &str, category: impl Into<String>, score: f64) -> Result<Self> {
        let category = category.into();

        if !(0.0..=1.0).contains(&score) {
            return Err(Error::config(format!(
                "score for pattern '{}' must be within [0, 1], got {}",
                category, score
            )));
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                Error::config(format!("Failed to compile '{}' pattern: {}", category, e))
            })?;

        Ok(Self {
            pattern: regex,
            category,
            score,
        })
    }

    /// Whether the keyword matches this pattern
    pub fn is_match(&self, keyword: &str) -> bool {
        self.pattern.is_match(keyword)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Ordered pattern table; earlier patterns take priority
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<KeywordPattern>,
}

impl PatternSet {
    /// Create a pattern set from compiled patterns, keeping their order
    pub fn new(patterns: Vec<KeywordPattern>) -> Self {
        Self { patterns }
    }

    /// The superlative, promise and medical claim patterns
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(vec![
            KeywordPattern::new(SUPERLATIVE_PATTERN, "superlative", 0.8)?,
            KeywordPattern::new(PROMISE_PATTERN, "promise", 0.7)?,
            KeywordPattern::new(MEDICAL_PATTERN, "medical", 0.9)?,
        ]))
    }

    /// First pattern matching the keyword
    pub fn first_match(&self, keyword: &str) -> Option<&KeywordPattern> {
        self.patterns.iter().find(|p| p.is_match(keyword))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordPattern> {
        self.patterns.iter()
    }
}
