//! # mcc-lookup
//!
//! Command-line front end for the MCC registry.
//!
//! The `mcc-lookup` binary prints the description of every code passed as an
//! argument, or lists every known category when run without arguments. This
//! library holds its configuration and output rendering.

#![warn(missing_docs)]

mod config;
mod output;

pub use config::{ConfigError, LookupConfig, OutputFormat, FORMAT_ENV_VAR};
pub use output::{render_categories, render_lookup};
