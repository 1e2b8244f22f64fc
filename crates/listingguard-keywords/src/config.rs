//! Configuration for the keyword engine and its prohibited-keyword store

use crate::patterns::{
    KeywordPattern, PatternSet, MEDICAL_PATTERN, PROMISE_PATTERN, SUPERLATIVE_PATTERN,
};
use listingguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default fuzzy similarity threshold; a match must be strictly above it
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.85;

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Where the prohibited-keyword list comes from
    #[serde(default)]
    pub store: StoreConfig,

    /// Classification tuning
    #[serde(default)]
    pub intelligence: IntelligenceConfig,
}

impl EngineConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&content)?)
    }
}

/// Load engine configuration from file
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig> {
    EngineConfig::from_file(path.as_ref())
        .map_err(|e| Error::config(format!("Failed to load engine config: {}", e)))
}

/// Classification tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Similarity a keyword must exceed to count as a fuzzy match
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Claim patterns in priority order
    #[serde(default = "default_patterns")]
    pub patterns: Vec<PatternSpec>,
}

impl Default for IntelligenceConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: default_fuzzy_threshold(),
            patterns: default_patterns(),
        }
    }
}

impl IntelligenceConfig {
    /// Validate the threshold and compile the pattern table
    pub fn compile(&self) -> Result<(f64, PatternSet)> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(Error::config(format!(
                "fuzzy_threshold must be within [0, 1], got {}",
                self.fuzzy_threshold
            )));
        }

        let patterns = self
            .patterns
            .iter()
            .map(|spec| KeywordPattern::new(&spec.pattern, spec.category.clone(), spec.score))
            .collect::<Result<Vec<_>>>()?;

        Ok((self.fuzzy_threshold, PatternSet::new(patterns)))
    }
}

/// Claim pattern specification (for config files)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Regular expression, matched case-insensitively
    pub pattern: String,

    /// Category named in the analysis reason
    pub category: String,

    /// Score and confidence reported on a match
    pub score: f64,
}

impl PatternSpec {
    pub fn new(pattern: impl Into<String>, category: impl Into<String>, score: f64) -> Self {
        Self {
            pattern: pattern.into(),
            category: category.into(),
            score,
        }
    }
}

/// Prohibited-keyword store specification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    /// In-process list
    Memory {
        #[serde(default)]
        keywords: Vec<String>,
    },

    /// JSON document on disk
    File { path: PathBuf },

    /// JSON document served over HTTP
    Remote {
        url: String,

        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::Memory {
            keywords: Vec::new(),
        }
    }
}

fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_patterns() -> Vec<PatternSpec> {
    vec![
        PatternSpec::new(SUPERLATIVE_PATTERN, "superlative", 0.8),
        PatternSpec::new(PROMISE_PATTERN, "promise", 0.7),
        PatternSpec::new(MEDICAL_PATTERN, "medical", 0.9),
    ]
}

fn default_timeout_secs() -> u64 {
    30
}
