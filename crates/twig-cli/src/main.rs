//! twig - Main Entry Point

use clap::Parser;
use tracing_subscriber::EnvFilter;
use twig_cli::{Args, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from(Args::parse());

    // RUST_LOG wins over --log
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    twig_cli::run(&config, &mut stdout.lock())?;

    Ok(())
}
