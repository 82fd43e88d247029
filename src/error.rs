//! Error types for the rate-fetching pipeline.

use jiff::civil::Date;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("date {date} is outside allowed range {start}..{end}")]
    OutOfRange { date: Date, start: Date, end: Date },

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("network error contacting API at {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("API returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("API did not return valid JSON: {source}. Raw: {body}")]
    UpstreamJson {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API error: {0}")]
    UpstreamApi(String),

    #[error("unexpected API response: {0}")]
    UpstreamShape(Value),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, RateError>;
