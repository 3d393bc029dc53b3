use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info};

use docgen::api::client::ApiClient;
use docgen::core::config::Config;
use docgen::core::tracing_init::init_tracing;
use docgen::pipeline;
use docgen::report::writer::ReportWriter;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // The only (optional) argument is a config file path; with no arguments
    // and no config.toml present the built-in defaults apply.
    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    let config = Config::load(&config_path).context(format!(
        "Failed to load configuration from '{}'",
        config_path.display()
    ))?;

    init_tracing(&config.logging);

    // The pipeline is one blocking call chain; a current-thread runtime is
    // all it needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    runtime.block_on(run(config));

    Ok(())
}

async fn run(config: Config) {
    info!(
        endpoint = %config.fetch.endpoint,
        timeout_secs = config.fetch.timeout_secs,
        output_dir = %config.report.output_dir.display(),
        "Report generation starting"
    );

    let client = match ApiClient::new(config.fetch.endpoint.clone(), config.fetch.timeout_secs) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create API client");
            std::process::exit(1);
        }
    };

    let writer = ReportWriter::new(config.report.output_dir.clone());

    match pipeline::run(&client, &writer, Utc::now()).await {
        Ok(path) => {
            info!(path = %path.display(), "Report generation complete");
            println!("Report saved to: {}", path.display());
        }
        Err(e) => {
            error!(kind = e.kind(), error = %e, "Report generation failed");
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
