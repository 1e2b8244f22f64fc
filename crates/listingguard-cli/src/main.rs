//! ListingGuard CLI
//!
//! Screens listing keywords against the configured prohibited-keyword store.

use anyhow::Result;
use clap::Parser;
use listingguard_keywords::{load_config, BatchSummary, EngineConfig, KeywordIntelligence};
use std::path::Path;
use tracing::{debug, info};

mod cli;
mod report;

use cli::{Cli, Commands, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = load_engine_config(&cli.config)?;
    let engine = KeywordIntelligence::from_config(&config)?;
    listingguard_keywords::telemetry::describe();

    match cli.command {
        Commands::Check {
            keywords,
            file,
            format,
            only_prohibited,
        } => {
            let mut keywords = keywords;
            if let Some(path) = &file {
                keywords.extend(report::read_keywords(path)?);
            }
            debug!("Checking {} keywords", keywords.len());

            let results = engine.analyze_batch(&keywords).await?;
            let summary = BatchSummary::from_results(&results);

            let shown: Vec<_> = if only_prohibited {
                results.into_iter().filter(|r| r.is_prohibited).collect()
            } else {
                results
            };

            match format {
                OutputFormat::Text => print!("{}", report::render_text(&shown, &summary)),
                OutputFormat::Json => println!("{}", report::render_json(&shown)?),
            }
        }

        Commands::Add { term } => {
            if engine.add_prohibited(&term).await? {
                println!("Added '{}' to the prohibited list", term.trim());
            } else {
                println!("'{}' is already prohibited", term.trim());
            }
        }

        Commands::List => {
            let db = engine.store().get_all().await?;
            for keyword in &db.keywords {
                println!("{}", keyword);
            }
            println!("\n{} prohibited keywords, last updated {}", db.len(), db.last_updated.to_rfc3339());
        }
    }

    Ok(())
}

/// Load the config file if present, otherwise run with defaults
fn load_engine_config(path: &Path) -> Result<EngineConfig> {
    if path.exists() {
        let config = load_config(path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    } else {
        info!("No configuration at {}, using defaults", path.display());
        Ok(EngineConfig::default())
    }
}

/// Target prefix matching every ListingGuard crate
const VERBOSE_FILTER: &str = "listingguard=debug";

/// Initialize tracing/logging on stderr
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("listingguard_keywords=warn,listingguard_cli=info")
        })
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = load_engine_config(Path::new("/nonexistent/listingguard.yaml")).unwrap();
        assert_eq!(
            config.intelligence.fuzzy_threshold,
            listingguard_keywords::DEFAULT_FUZZY_THRESHOLD
        );
    }

    #[test]
    fn test_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listingguard.yaml");
        std::fs::write(
            &path,
            "store:\n  type: memory\n  keywords: [replica]\nintelligence:\n  fuzzy_threshold: 0.9\n",
        )
        .unwrap();

        let config = load_engine_config(&path).unwrap();
        assert_eq!(config.intelligence.fuzzy_threshold, 0.9);
    }

    #[test]
    fn test_verbose_filter_covers_all_crates() {
        use tracing::Level;
        use tracing_subscriber::filter::Targets;

        let targets: Targets = VERBOSE_FILTER.parse().unwrap();
        assert!(targets.would_enable("listingguard_keywords::intelligence", &Level::DEBUG));
        assert!(targets.would_enable("listingguard_keywords::store", &Level::DEBUG));
        assert!(targets.would_enable("listingguard_cli", &Level::DEBUG));
        assert!(!targets.would_enable("reqwest::connect", &Level::DEBUG));
    }

    #[test]
    fn test_invalid_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listingguard.yaml");
        std::fs::write(&path, "store: [unterminated").unwrap();

        assert!(load_engine_config(&path).is_err());
    }
}
