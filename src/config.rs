//! Effective configuration, resolved from CLI flags with environment
//! fallbacks.

use std::env;

use crate::Cli;
use crate::client::{AuthMode, trim_credential};
use crate::error::{RateError, Result};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/";

pub const KEY_VAR: &str = "API_KEY";
pub const URL_VAR: &str = "API_URL";
pub const AUTH_MODE_VAR: &str = "API_AUTH_MODE";

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub credential: String,
    pub auth_mode: AuthMode,
}

impl Config {
    /// Resolve each knob as: CLI flag, else environment variable, else
    /// default. A missing credential is the one knob with no default.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Self::resolve_with(cli, |name| env::var(name).ok())
    }

    /// Same as [`Config::resolve`], with the environment supplied as a
    /// lookup function. Empty values count as unset.
    pub fn resolve_with(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |name: &str| env(name).filter(|value| !value.is_empty());

        let endpoint = cli
            .api_url
            .clone()
            .or_else(|| lookup(URL_VAR))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());

        let credential = cli
            .api_key
            .clone()
            .or_else(|| lookup(KEY_VAR))
            .map(|key| trim_credential(&key).to_owned())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                RateError::Configuration(format!(
                    "no API key: pass --api-key or set the {KEY_VAR} environment variable"
                ))
            })?;

        let auth_mode = match cli.api_auth_mode.clone().or_else(|| lookup(AUTH_MODE_VAR)) {
            Some(text) => text.parse()?,
            None => AuthMode::default(),
        };

        Ok(Self {
            endpoint,
            credential,
            auth_mode,
        })
    }
}
