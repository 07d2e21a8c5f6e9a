//! End-to-end tests for the kmer-locate binary.
//!
//! Each test writes its inputs into a fresh temporary directory, runs the
//! compiled binary, and checks the report file and exit status.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write test input");
    path
}

fn kmer_locate() -> Command {
    Command::cargo_bin("kmer-locate").expect("Binary should be built")
}

#[test]
fn test_end_to_end_report() {
    let dir = TempDir::new().unwrap();
    let kmers = write_file(dir.path(), "kmers.txt", b"AC\nTTTT\n");
    let fasta = write_file(dir.path(), "seqs.fa", b">s1\nGGACGG\n>s2\nAAAATTTT\n");
    let output = dir.path().join("out.txt");

    kmer_locate()
        .arg("-d")
        .arg(&kmers)
        .arg("-f")
        .arg(&fasta)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert_eq!(report, "AC\ts1\nTTTT\ts2\n");
}

#[test]
fn test_default_output_path() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "kmers.txt", b"GT\n");
    write_file(dir.path(), "seqs.fa", b">chrA\nAAACAAA\n");

    kmer_locate()
        .current_dir(dir.path())
        .args(["--kmers", "kmers.txt", "--fasta", "seqs.fa"])
        .assert()
        .success();

    // GT matches chrA through its reverse complement AC
    let report = std::fs::read_to_string(dir.path().join("matches.txt")).unwrap();
    assert_eq!(report, "GT\tchrA\n");
}

#[test]
fn test_unmatched_kmers_omitted_and_ids_joined() {
    let dir = TempDir::new().unwrap();
    let kmers = write_file(
        dir.path(),
        "kmers.txt",
        b"GGGGGG\tignored column\n\nACGT\nCCCCCC\n",
    );
    let fasta = write_file(
        dir.path(),
        "seqs.fa",
        b">r1 first record\nTTAC\nGTTT\n>r2\nAAAA\n>r3\nACGTACGT\n",
    );
    let output = dir.path().join("out.txt");

    kmer_locate()
        .arg("--kmers")
        .arg(&kmers)
        .arg("--fasta")
        .arg(&fasta)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let report = std::fs::read_to_string(&output).unwrap();
    assert_eq!(report, "ACGT\tr1 first record,r3\n");
}

#[test]
fn test_gzipped_fasta() {
    let dir = TempDir::new().unwrap();
    let kmers = write_file(dir.path(), "kmers.txt", b"AC\n");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(b">s1\nGGACGG\n>s2\nCCCC\n").unwrap();
    let fasta = write_file(dir.path(), "seqs.fa.gz", &encoder.finish().unwrap());
    let output = dir.path().join("out.txt");

    kmer_locate()
        .arg("-d")
        .arg(&kmers)
        .arg("-f")
        .arg(&fasta)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "AC\ts1\n");
}

#[test]
fn test_missing_kmer_file_fails() {
    let dir = TempDir::new().unwrap();
    let fasta = write_file(dir.path(), "seqs.fa", b">s1\nACGT\n");
    let output = dir.path().join("out.txt");

    kmer_locate()
        .arg("-d")
        .arg(dir.path().join("no_such_kmers.txt"))
        .arg("-f")
        .arg(&fasta)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_kmers.txt"));

    assert!(!output.exists());
}

#[test]
fn test_missing_fasta_keeps_previous_report() {
    let dir = TempDir::new().unwrap();
    let kmers = write_file(dir.path(), "kmers.txt", b"AC\n");
    let output = write_file(dir.path(), "out.txt", b"AC\told\n");

    kmer_locate()
        .arg("-d")
        .arg(&kmers)
        .arg("-f")
        .arg(dir.path().join("absent.fa"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.fa"));

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "AC\told\n");
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let kmers = write_file(dir.path(), "kmers.txt", b"AC\n");
    let fasta = write_file(dir.path(), "seqs.fa", b">s1\nAC\n");

    kmer_locate()
        .arg("-d")
        .arg(&kmers)
        .arg("-f")
        .arg(&fasta)
        .arg("-o")
        .arg(dir.path().join("missing_dir").join("out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write report"));
}

#[test]
fn test_required_flags() {
    kmer_locate()
        .args(["-d", "kmers.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fasta"));
}
