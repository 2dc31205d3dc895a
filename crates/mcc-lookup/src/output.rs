//! Rendering of lookup results.

use mcc_registry::{Category, LookupError, LookupResult};
use serde::Serialize;

use crate::config::OutputFormat;

/// JSON shape of a single lookup.
#[derive(Serialize)]
#[serde(untagged)]
enum LookupReport<'a> {
    Found(&'a Category),
    Failed {
        input: &'a str,
        error: &'static str,
        message: String,
    },
}

fn error_kind(err: &LookupError) -> &'static str {
    match err {
        LookupError::EmptyCode => "empty_code",
        LookupError::InvalidFormat { .. } => "invalid_format",
        LookupError::NotFound { .. } => "not_found",
    }
}

/// Renders the result of looking up `input` as a single line.
pub fn render_lookup(
    input: &str,
    result: &LookupResult<Category>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(match result {
            Ok(category) => format!("MCC {}: {}", category.code, category.description),
            Err(e) => format!("Error getting category for code {input:?}: {e}"),
        }),
        OutputFormat::Json => {
            let report = match result {
                Ok(category) => LookupReport::Found(category),
                Err(e) => LookupReport::Failed {
                    input,
                    error: error_kind(e),
                    message: e.to_string(),
                },
            };
            serde_json::to_string(&report)
        }
    }
}

/// Renders a full category listing.
///
/// Categories are written in the order given.
pub fn render_categories<'a>(
    categories: impl IntoIterator<Item = &'a Category>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            let mut out = String::from("All available categories:");
            for category in categories {
                out.push('\n');
                out.push_str(&category.to_string());
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let categories: Vec<&Category> = categories.into_iter().collect();
            serde_json::to_string_pretty(&categories)
        }
    }
}
