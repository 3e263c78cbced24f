use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use typecover::{Cli, Settings};

fn main() -> Result<()> {
    // Load .env file if it exists (for TYPECOVER_MODE and friends)
    let _ = dotenvy::dotenv();

    // Logs go to stderr, stdout only carries solutions
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    typecover::run(&cli, &settings, &mut out)
}
