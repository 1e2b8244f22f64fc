//! Metrics recorded by the keyword engine
//!
//! Recording goes through the `metrics` facade and is a no-op until the
//! embedding application installs a recorder.

use listingguard_core::MatchType;

pub const KEYWORDS_ANALYZED_TOTAL: &str = "listingguard_keywords_analyzed_total";
pub const STORE_FETCH_ERRORS_TOTAL: &str = "listingguard_store_fetch_errors_total";
pub const BATCH_LATENCY_US: &str = "listingguard_batch_latency_us";

/// Register metric descriptions with the installed recorder
pub fn describe() {
    metrics::describe_counter!(
        KEYWORDS_ANALYZED_TOTAL,
        "Total number of keywords classified by match type"
    );
    metrics::describe_counter!(
        STORE_FETCH_ERRORS_TOTAL,
        "Total number of failed prohibited-keyword fetches"
    );
    metrics::describe_histogram!(
        BATCH_LATENCY_US,
        metrics::Unit::Microseconds,
        "Batch analysis latency in microseconds"
    );
}

pub(crate) fn record_analysis(match_type: MatchType) {
    metrics::counter!(KEYWORDS_ANALYZED_TOTAL, "match_type" => match_type.as_str()).increment(1);
}

pub(crate) fn record_fetch_error() {
    metrics::counter!(STORE_FETCH_ERRORS_TOTAL).increment(1);
}

pub(crate) fn record_batch_latency(latency_us: f64) {
    metrics::histogram!(BATCH_LATENCY_US).record(latency_us);
}
