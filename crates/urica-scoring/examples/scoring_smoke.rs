//! Smoke test for the one-shot scoring flow.
//!
//! Reads a JSON array of 32 responses (each 1–5) from the first argument or
//! from stdin, scores it, and prints the structured report. This is the
//! whole caller contract: marshal responses in, render the report out.
//!
//! Usage:
//!   cargo run -p urica-scoring --example scoring_smoke -- '[3,3,3,...]'
//!   echo '[3,3,3,...]' | cargo run -p urica-scoring --example scoring_smoke

use std::io::Read;

use urica_core::models::ResponseSet;
use urica_scoring::score;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_env_filter("info").init();

    let raw = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let responses: ResponseSet = serde_json::from_str(raw.trim())?;
    tracing::info!(count = responses.len(), "scoring response set");

    let report = score(&responses)?;
    println!("{}", report.to_structured_text());

    Ok(())
}
