//! `supercar`: prints the reference engine and car.
//!
//! The report goes to stdout. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use std::io::{self, stdout};

use anyhow::{Context, Result};
use race_models::models::vehicle::Showcase;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let showcase = Showcase::reference();
    showcase
        .write_report(&mut stdout().lock())
        .context("writing report to stdout")?;

    Ok(())
}
