//! Fetch a currency exchange rate for a given (base, target, date) triple
//! from a locally hosted exchange API and persist the enriched response as a
//! JSON snapshot.

use std::path::{Path, PathBuf};

use clap::Parser;

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod output;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_server;

pub use crate::client::{AuthMode, fetch_rate};
pub use crate::config::Config;
pub use crate::error::{RateError, Result};
pub use crate::logger::ErrorLog;
pub use crate::output::{RateRecord, ResultWriter};
pub use crate::validate::{DateWindow, parse_date, validate_currency};

/// Fetch a currency exchange rate for a given date from the local API and
/// save it as JSON.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Base currency code, e.g. USD
    #[arg(short, long)]
    pub base: String,

    /// Target currency code, e.g. EUR
    #[arg(short, long)]
    pub target: String,

    /// Date in YYYY-MM-DD format
    #[arg(short, long)]
    pub date: String,

    /// API base URL (default: env API_URL or http://localhost:8080/)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// API key (overrides the API_KEY environment variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Auth mode: form:key | form:api_key | header:bearer | query:key
    #[arg(long, value_name = "MODE")]
    pub api_auth_mode: Option<String>,
}

/// Run the whole pipeline: validate, fetch, persist. Returns the artifact
/// path relative to `root`.
pub fn run(cli: &Cli, root: &Path) -> Result<PathBuf> {
    let base = cli.base.to_ascii_uppercase();
    let target = cli.target.to_ascii_uppercase();
    validate_currency(&base)?;
    validate_currency(&target)?;
    if base == target {
        return Err(RateError::InvalidInput(
            "base and target currencies must be different".into(),
        ));
    }
    let date = parse_date(&cli.date, &DateWindow::default())?;

    let config = Config::resolve(cli)?;
    let payload = fetch_rate(&base, &target, date, &config)?;

    let record = RateRecord::new(base, target, date, payload);
    ResultWriter::new(root).write(&record)
}
