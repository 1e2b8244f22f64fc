//! Keyword input parsing and result rendering

use anyhow::{Context, Result};
use listingguard_core::KeywordAnalysis;
use listingguard_keywords::BatchSummary;
use std::fmt::Write as _;
use std::path::Path;

/// Parse a keyword list: one keyword per line, blank lines and `#` comments skipped
pub fn parse_keywords(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a keyword list from disk
pub fn read_keywords(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keywords from {}", path.display()))?;
    Ok(parse_keywords(&content))
}

/// Render results as aligned text lines followed by a summary
pub fn render_text(results: &[KeywordAnalysis], summary: &BatchSummary) -> String {
    let width = results
        .iter()
        .map(|r| r.keyword.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for result in results {
        let verdict = if result.is_prohibited { "PROHIBITED" } else { "ok" };
        let _ = write!(
            out,
            "{:<width$}  {:<10}  {:<7}  {:.2}",
            result.keyword,
            verdict,
            result.match_type,
            result.score,
            width = width
        );
        if let Some(reason) = &result.reason {
            let _ = write!(out, "  {}", reason);
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "\n{} keywords, {} prohibited (exact: {}, fuzzy: {}, pattern: {})",
        summary.total, summary.prohibited, summary.exact, summary.fuzzy, summary.pattern
    );

    out
}

/// Render results as a JSON array
pub fn render_json(results: &[KeywordAnalysis]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
