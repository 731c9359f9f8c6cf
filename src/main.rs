use std::process::ExitCode;

use clap::Parser;
use reqres_contract::cli::Cli;
use reqres_contract::client::ApiClient;
use reqres_contract::config::HarnessConfig;
use reqres_contract::schema::DirSchemaStore;
use reqres_contract::suite::{reqres_cases, Suite};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        for case in reqres_cases() {
            println!("{}", case.name);
        }
        return ExitCode::SUCCESS;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match HarnessConfig::from_env().and_then(|c| cli.apply(c)) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match ApiClient::new(&config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        base_url = %config.base_url,
        schema_dir = %config.schema_dir.display(),
        "running contract suite"
    );

    let suite = Suite::reqres(client, DirSchemaStore::new(&config.schema_dir));
    let report = suite.run_matching(&cli.filters).await;

    // One JSON object per case on stdout.
    for outcome in &report.outcomes {
        match serde_json::to_string(outcome) {
            Ok(line) => println!("{line}"),
            Err(e) => tracing::error!("cannot serialize outcome for {}: {e}", outcome.name),
        }
    }

    if report.outcomes.is_empty() {
        tracing::error!("no case matched {:?}", cli.filters);
        return ExitCode::FAILURE;
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
