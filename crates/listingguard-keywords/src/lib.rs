//! ListingGuard Keywords
//!
//! Screens listing keywords against a prohibited-term policy.
//!
//! Each keyword goes through three checks, first hit wins:
//! - Exact lookup in the prohibited-keyword list
//! - Fuzzy match by normalized Levenshtein similarity
//! - Claim patterns (superlative, promise, medical)
//!
//! The prohibited list is supplied by a [`ProhibitedKeywords`] store passed
//! in at construction.

pub mod config;
pub mod intelligence;
pub mod levenshtein;
pub mod patterns;
pub mod store;
pub mod telemetry;

pub use config::{
    load_config, EngineConfig, IntelligenceConfig, PatternSpec, StoreConfig,
    DEFAULT_FUZZY_THRESHOLD,
};
pub use intelligence::{BatchSummary, KeywordIntelligence, KeywordMatcher, ProhibitedIndex};
pub use levenshtein::{levenshtein_distance, levenshtein_similarity};
pub use patterns::{KeywordPattern, PatternSet};
pub use store::{FileStore, MemoryStore, ProhibitedKeywords, RemoteStore};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{EngineConfig, IntelligenceConfig, StoreConfig};
    pub use crate::intelligence::{BatchSummary, KeywordIntelligence};
    pub use crate::store::{FileStore, MemoryStore, ProhibitedKeywords, RemoteStore};
    pub use listingguard_core::{KeywordAnalysis, MatchType, ProhibitedKeywordsDb};
}
