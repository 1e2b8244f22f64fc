//! ListingGuard Core
//!
//! Core types and error handling shared across ListingGuard components.
//!
//! This crate provides:
//! - The keyword analysis record produced by the screening engine
//! - The prohibited-keyword snapshot exchanged with keyword stores
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{normalize_keyword, KeywordAnalysis, MatchType, ProhibitedKeywordsDb};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{normalize_keyword, KeywordAnalysis, MatchType, ProhibitedKeywordsDb};
}
