use anyhow::Result;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use record_store::{driver, SeedData};

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays the plain report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let seed = SeedData::builtin()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(&mut out, &seed)?;
    out.flush()?;

    Ok(())
}
