use anyhow::Context;
use tracing::info;

use crate::cli::Cli;
use crate::matching::engine::{KmerMatches, MatchingEngine};
use crate::parsing::fasta::parse_fasta;
use crate::parsing::kmers::load_kmers;
use crate::report::writer::write_report;

/// Run the full pipeline: load k-mers, load sequences, search, write the report.
///
/// The report is only written after the search completes, so any failure leaves
/// an existing report untouched.
pub fn run(cli: &Cli) -> anyhow::Result<KmerMatches> {
    let kmers = load_kmers(&cli.kmers).context("Failed to load k-mers")?;
    info!("Loaded {} k-mers from {}", kmers.len(), cli.kmers.display());

    let sequences = parse_fasta(&cli.fasta).context("Failed to load FASTA sequences")?;
    info!(
        "Loaded {} sequences from {}",
        sequences.len(),
        cli.fasta.display()
    );

    let matches = MatchingEngine::new(&sequences).find_matches(&kmers);
    info!(
        "{} of {} k-mers found in at least one sequence",
        matches.matched_count(),
        matches.len()
    );

    write_report(&matches, &cli.output).context("Failed to write report")?;
    info!("Report written to {}", cli.output.display());

    Ok(matches)
}
