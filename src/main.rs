use clap::Parser;
use tracing_subscriber::EnvFilter;

use kmer_locate::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG overrides the default of warnings only
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kmer_locate=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::find::run(&cli)?;

    Ok(())
}
