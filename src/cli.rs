use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::HarnessConfig;

/// Command line for the `reqres-contract` binary.
///
/// Flags override the matching `REQRES_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "reqres-contract")]
#[command(about = "Run schema-validated contract cases against the reqres.in demo service")]
#[command(
    after_help = "Environment:\n  REQRES_BASE_URL      Service root (default https://reqres.in)\n  REQRES_SCHEMA_DIR    Schema directory (default schemas)\n  REQRES_TIMEOUT_SECS  Per-request timeout (default 30)\n  REQRES_API_KEY       Sent as x-api-key\n  RUST_LOG             Log filter (default info)"
)]
pub struct Cli {
    /// Run only cases whose name contains one of these substrings.
    pub filters: Vec<String>,
    /// Service root, e.g. http://127.0.0.1:8080.
    #[arg(long)]
    pub base_url: Option<String>,
    /// Directory holding `<name>.json` schema files.
    #[arg(long)]
    pub schema_dir: Option<PathBuf>,
    /// Per-request timeout in seconds.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
    /// Print the case names and exit.
    #[arg(long, default_value_t = false)]
    pub list: bool,
}

impl Cli {
    /// Layer command-line overrides over an environment-derived config.
    pub fn apply(&self, config: HarnessConfig) -> Result<HarnessConfig, String> {
        let mut config = match &self.base_url {
            Some(url) => config.with_base_url(url).map_err(|e| format!("--base-url: {e}"))?,
            None => config,
        };
        if let Some(dir) = &self.schema_dir {
            config.schema_dir = dir.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}
