//! Command-line interface for kmer-locate.
//!
//! A single command: load a k-mer list and a FASTA file, find which sequences
//! contain each k-mer (or its reverse complement), and write a report.
//!
//! ## Usage
//!
//! ```text
//! # Default report path is matches.txt
//! kmer-locate -d kmers.txt -f sequences.fa
//!
//! # Compressed FASTA and a custom report path
//! kmer-locate --kmers kmers.txt --fasta sequences.fa.gz --output hits.tsv
//!
//! # Progress logging
//! RUST_LOG=kmer_locate=info kmer-locate -d kmers.txt -f sequences.fa
//! ```

use std::path::PathBuf;

use clap::Parser;

pub mod find;

/// Default report path when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "matches.txt";

#[derive(Parser, Debug)]
#[command(name = "kmer-locate")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find k-mers and their reverse complements in FASTA sequences")]
#[command(
    long_about = "kmer-locate reports, for each query k-mer, the FASTA records containing it.\n\nA record matches when it contains the k-mer or its reverse complement as an exact, case-sensitive substring. The report has one line per matched k-mer: the k-mer, a tab, then the matching record IDs separated by commas. K-mers without matches are left out.\n\nSet RUST_LOG (e.g. RUST_LOG=kmer_locate=info) to see progress on stderr."
)]
pub struct Cli {
    /// File with k-mers (one per line, first column)
    #[arg(short = 'd', long, required = true)]
    pub kmers: PathBuf,

    /// FASTA file with sequences (may be gzip/bgzip compressed)
    #[arg(short = 'f', long, required = true)]
    pub fasta: PathBuf,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["kmer-locate", "-d", "k.txt", "-f", "s.fa"]).unwrap();
        assert_eq!(cli.kmers, PathBuf::from("k.txt"));
        assert_eq!(cli.fasta, PathBuf::from("s.fa"));
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "kmer-locate",
            "--kmers",
            "k.txt",
            "--fasta",
            "s.fa.gz",
            "--output",
            "out/hits.tsv",
        ])
        .unwrap();
        assert_eq!(cli.fasta, PathBuf::from("s.fa.gz"));
        assert_eq!(cli.output, PathBuf::from("out/hits.tsv"));
    }

    #[test]
    fn test_missing_required_flag() {
        assert!(Cli::try_parse_from(["kmer-locate", "-d", "k.txt"]).is_err());
        assert!(Cli::try_parse_from(["kmer-locate", "-f", "s.fa"]).is_err());
    }
}
