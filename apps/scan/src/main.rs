mod config;
mod errors;
mod handler;
mod logging;
mod models;
mod scoring;

use std::io::{self, Write};

use tracing::info;

use crate::config::Config;
use crate::errors::ScanError;
use crate::handler::{handle_scan, into_response};
use crate::models::response::ScanResponse;
use crate::scoring::build_scorer;

/// Reads one JSON payload from stdin and writes exactly one JSON line to
/// stdout. Always exits 0; failures travel in the payload.
fn main() {
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|c| c.rust_log.clone())
        .unwrap_or_else(|_| Config::default().rust_log);
    logging::init_tracing(&log_level);
    logging::install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let response = run(config);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", response.to_json_line());
    let _ = stdout.flush();
}

fn run(config: anyhow::Result<Config>) -> ScanResponse {
    let config = match config {
        Ok(config) => config,
        Err(e) => return into_response(Err(ScanError::Internal(e)), false),
    };

    info!(
        "Starting {} v{} (scorer: {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.scorer
    );

    let scorer = build_scorer(config.scorer);
    let result = read_input().and_then(|raw| handle_scan(&raw, scorer.as_ref()));

    into_response(result, config.include_breakdown)
}

fn read_input() -> Result<String, ScanError> {
    Ok(io::read_to_string(io::stdin())?)
}
