use std::path::PathBuf;
use std::time::Duration;

/// Public demo service the scenario catalog is written against.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Default directory holding the JSON Schema files.
const DEFAULT_SCHEMA_DIR: &str = "schemas";

/// Default timeout for a single request (30 seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Harness configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub base_url: String,
    pub schema_dir: PathBuf,
    pub request_timeout: Duration,
    pub api_key: Option<String>,
}

impl HarnessConfig {
    /// Configuration targeting `base_url` with every other value defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            schema_dir: PathBuf::from(DEFAULT_SCHEMA_DIR),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            api_key: None,
        }
    }

    /// Load configuration from environment.
    ///
    /// - `REQRES_BASE_URL` (optional, default `https://reqres.in`) — service root
    /// - `REQRES_SCHEMA_DIR` (optional, default `schemas`) — schema directory
    /// - `REQRES_TIMEOUT_SECS` (optional, default 30) — max seconds per request
    /// - `REQRES_API_KEY` (optional) — sent as `x-api-key` when set
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HarnessConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("REQRES_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&base_url).map_err(|e| format!("REQRES_BASE_URL: {e}"))?;
        let mut config = Self::new(base_url);

        if let Some(dir) = lookup("REQRES_SCHEMA_DIR") {
            config.schema_dir = PathBuf::from(dir);
        }

        if let Some(val) = lookup("REQRES_TIMEOUT_SECS") {
            let secs = val
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| "REQRES_TIMEOUT_SECS must be a positive integer".to_string())?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.api_key = lookup("REQRES_API_KEY").filter(|key| !key.trim().is_empty());

        Ok(config)
    }

    /// Point the configuration at another service root, validating it first.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, String> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }
}

/// Parse and normalize a service root: an absolute http(s) URL with a host,
/// returned without a trailing `/`.
fn parse_base_url(raw: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(raw).map_err(|e| format!("invalid base URL `{raw}`: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("base URL must use http or https, got `{raw}`"));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("base URL has no host: `{raw}`"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(format!("base URL must not carry a query or fragment: `{raw}`"));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}
