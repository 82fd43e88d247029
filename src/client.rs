//! HTTP client for the local exchange-rate API.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use jiff::civil::Date;
use serde_json::Value;
use ureq::Agent;

use crate::config::Config;
use crate::error::{RateError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Characters of a failed response body kept for diagnostics.
const BODY_SNIPPET_CHARS: usize = 200;

/// Where the API credential is placed in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Form field named `key`
    #[default]
    FormKey,
    /// Form field named `api_key`
    FormApiKey,
    /// `Authorization: Bearer <credential>` header
    HeaderBearer,
    /// Query parameter named `key`
    QueryKey,
}

impl FromStr for AuthMode {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "form:key" => Ok(Self::FormKey),
            "form:api_key" => Ok(Self::FormApiKey),
            "header:bearer" => Ok(Self::HeaderBearer),
            "query:key" => Ok(Self::QueryKey),
            _ => Err(RateError::Configuration(format!(
                "unknown API auth mode '{s}'"
            ))),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FormKey => "form:key",
            Self::FormApiKey => "form:api_key",
            Self::HeaderBearer => "header:bearer",
            Self::QueryKey => "query:key",
        })
    }
}

/// Strip surrounding whitespace and any BOM artifact from a credential that
/// came from a flag, a file, or an environment variable.
pub fn trim_credential(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// POST a single rate request and interpret the response envelope.
///
/// The query always carries `from`, `to` and `date`; the credential is
/// placed according to [`Config::auth_mode`]. On success the full parsed
/// payload is returned unmodified for the caller to treat as opaque.
pub fn fetch_rate(base: &str, target: &str, date: Date, config: &Config) -> Result<Value> {
    let url = format!("{}/", config.endpoint.trim_end_matches('/'));
    let credential = trim_credential(&config.credential);

    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .http_status_as_error(false)
        .build()
        .new_agent();

    let request = agent
        .post(url.as_str())
        .query("from", base)
        .query("to", target)
        .query("date", date.to_string());

    let sent = match config.auth_mode {
        AuthMode::FormKey => request.send_form([("key", credential)]),
        AuthMode::FormApiKey => request.send_form([("api_key", credential)]),
        AuthMode::HeaderBearer => request
            .header("Authorization", format!("Bearer {credential}"))
            .send_empty(),
        AuthMode::QueryKey => request.query("key", credential).send_empty(),
    };

    let mut response = sent.map_err(|e| RateError::Network {
        url: url.clone(),
        source: Box::new(e),
    })?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| RateError::Network {
            url: url.clone(),
            source: Box::new(e),
        })?;

    if status != 200 {
        return Err(RateError::UpstreamStatus {
            status,
            body: snippet(&body),
        });
    }

    let payload: Value = serde_json::from_str(&body).map_err(|e| RateError::UpstreamJson {
        body: snippet(&body),
        source: e,
    })?;

    if let Some(error) = payload.get("error") {
        if is_truthy(error) {
            return Err(RateError::UpstreamApi(error_text(error)));
        }
    }

    if payload.get("data").is_none() {
        return Err(RateError::UpstreamShape(payload));
    }

    Ok(payload)
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}

/// Truthiness of the envelope's `error` field: empty strings, `false`,
/// zero, `null` and empty collections all mean "no error".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn error_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
