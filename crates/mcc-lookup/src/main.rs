//! MCC lookup binary.
//!
//! Usage: `mcc-lookup [CODE]...`. With no codes, lists every category.

use std::process::ExitCode;

use mcc_lookup::{render_categories, render_lookup, LookupConfig};
use mcc_registry::Registry;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = LookupConfig::from_env()?;
    tracing::debug!("Output format: {:?}", config.format);

    let registry = Registry::global();
    tracing::info!("MCC registry loaded with {} categories", registry.len());

    let codes: Vec<String> = std::env::args().skip(1).collect();

    if codes.is_empty() {
        println!("{}", render_categories(registry.iter_sorted(), config.format)?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut failures = 0;
    for code in &codes {
        let result = registry.lookup_record(code);
        if result.is_err() {
            failures += 1;
        }
        println!("{}", render_lookup(code, &result, config.format)?);
    }

    if failures > 0 {
        tracing::warn!("{} of {} lookups failed", failures, codes.len());
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
