use anyhow::Result;
use campus_client::{CampusClient, config, diagnostics};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Initialize tracing with the determined log level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .init();

    info!("Running campus gateway diagnostics");

    let client = CampusClient::new(&config)?;
    let report = diagnostics::run(&client).await;

    println!("Gateway: {}", report.gateway_url);
    for probe in &report.probes {
        let mark = if probe.ok { " ok " } else { "FAIL" };
        println!("  [{mark}] {:<12} {}", probe.name, probe.detail);
    }

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}
