//! End-to-end tests of the flank-extract binary.

use std::fs;
use std::io::{Read as _, Write};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use tempfile::TempDir;

const FLANKS: &str = ">amp_F 10\nAAAA\n>amp_R 10\nTTTT\n";

/// Minimal FASTQ with a dummy quality line per read
fn fastq(seqs: &[&str]) -> String {
    seqs.iter()
        .enumerate()
        .map(|(i, seq)| format!("@read{i}\n{seq}\n+\n{}\n", "I".repeat(seq.len())))
        .collect()
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn write_gz(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut encoder = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
    path
}

fn flank_extract() -> Command {
    Command::cargo_bin("flank-extract").unwrap()
}

fn extract(flanks: &Path, input: &Path, output: &Path) -> Command {
    let mut cmd = flank_extract();
    cmd.arg("extract")
        .arg("-f")
        .arg(flanks)
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output);
    cmd
}

#[test]
fn test_end_to_end_example() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", FLANKS);
    // Second read's region is 35 bp, outside 10 +/- 20
    let reads = write_file(
        &dir,
        "reads.fq",
        &fastq(&[
            "AAAAGGGGGGGGGGTTTT",
            &format!("AAAA{}TTTT", "G".repeat(35)),
        ]),
    );
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output).assert().success();

    // AAAA/TTTT are reverse complements of each other, so the reverse
    // strand of the first read matches too
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        ">Read_0\nGGGGGGGGGG\n>Read_1\nCCCCCCCCCC\n"
    );
}

#[test]
fn test_reverse_strand_only() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">L 12\nACCGGA\n>R 12\nTTCAGC\n");
    // Reverse complement of ACCGGA + 12 x G + TTCAGC
    let reads = write_file(&dir, "reads.fq", &fastq(&["GCTGAACCCCCCCCCCCCTCCGGT"]));
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output).assert().success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        ">Read_0\nGGGGGGGGGGGG\n"
    );
}

#[test]
fn test_no_match_writes_empty_output() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">L 12\nACCGGA\n>R 12\nTTCAGC\n");
    let reads = write_file(&dir, "reads.fq", &fastq(&["GGGGGGGGGGGG", "CACACACA"]));
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output).assert().success();
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn test_gzipped_input_and_output() {
    let dir = TempDir::new().unwrap();
    let flanks = write_gz(&dir, "flanks.fa.gz", ">L 12\nACCGGA\n>R 12\nTTCAGC\n");
    let reads = write_gz(
        &dir,
        "reads.fastq.gz",
        &fastq(&["CCACCGGAGGGGGGGGGGGGTTCAGCAA"]),
    );
    let output = dir.path().join("regions.fa.gz");

    extract(&flanks, &reads, &output).assert().success();

    let mut decoded = String::new();
    flate2::read::GzDecoder::new(fs::File::open(&output).unwrap())
        .read_to_string(&mut decoded)
        .unwrap();
    assert_eq!(decoded, ">Read_0\nGGGGGGGGGGGG\n");
}

#[test]
fn test_stdin_to_stdout() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">L 12\nACCGGA\n>R 12\nTTCAGC\n");

    flank_extract()
        .arg("extract")
        .arg("-f")
        .arg(&flanks)
        .arg("-i")
        .arg("-")
        .write_stdin(fastq(&["ACCGGAGGGGGGGGGGGGTTCAGC"]))
        .assert()
        .success()
        .stdout(">Read_0\nGGGGGGGGGGGG\n");
}

#[test]
fn test_tolerance_option() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">L 100\nACCGGA\n>R 100\nTTCAGC\n");
    let read = format!("ACCGGA{}TTCAGC", "G".repeat(105));
    let reads = write_file(&dir, "reads.fq", &fastq(&[&read]));

    let default_out = dir.path().join("default.fa");
    extract(&flanks, &reads, &default_out).assert().success();
    assert!(fs::read_to_string(&default_out).unwrap().starts_with(">Read_0\n"));

    let narrow_out = dir.path().join("narrow.fa");
    extract(&flanks, &reads, &narrow_out)
        .args(["--tolerance", "5"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&narrow_out).unwrap(), "");
}

#[test]
fn test_verbose_zero_tolerance_logs_empty_window() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">L 100\nACCGGA\n>R 100\nTTCAGC\n");
    let reads = write_file(&dir, "reads.fq", &fastq(&["ACGT"]));
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output)
        .args(["--tolerance", "0", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("accepting none bp"))
        .stderr(predicate::str::contains("101-99").not());
}

#[test]
fn test_empty_flank_file_fails_before_output() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", "");
    let reads = write_file(&dir, "reads.fq", &fastq(&["ACGT"]));
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No sequences found in flank file"));

    assert!(!output.exists());
}

#[test]
fn test_length_mismatch_fails_before_output() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">amp_F 100\nACGT\n>amp_R 120\nTTGA\n");
    let reads = write_file(&dir, "reads.fq", &fastq(&["ACGT"]));
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("amp_F"))
        .stderr(predicate::str::contains("amp_R"))
        .stderr(predicate::str::contains("100 != 120"));

    assert!(!output.exists());
}

#[test]
fn test_unpaired_flank_record_fails() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">a 10\nACGT\n>b 10\nTTGA\n>orphan 10\nGGCC\n");
    let reads = write_file(&dir, "reads.fq", &fastq(&["ACGT"]));
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("orphan"));
}

#[test]
fn test_malformed_descriptor_fails() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", ">a\nACGT\n>b 10\nTTGA\n");
    let reads = write_file(&dir, "reads.fq", &fastq(&["ACGT"]));
    let output = dir.path().join("regions.fa");

    extract(&flanks, &reads, &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed descriptor"));
}

#[test]
fn test_stats_json() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", FLANKS);
    let reads = write_file(
        &dir,
        "reads.fq",
        &fastq(&["AAAAGGGGGGGGGGTTTT", "CCCCCCCC"]),
    );
    let output = dir.path().join("regions.fa");
    let stats = dir.path().join("stats.json");

    extract(&flanks, &reads, &output)
        .arg("--stats")
        .arg(&stats)
        .args(["--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&stats).unwrap()).unwrap();
    assert_eq!(value["reads_processed"], 2);
    assert_eq!(value["reads_with_regions"], 1);
    assert_eq!(value["regions_emitted"], 2);
    assert_eq!(value["forward_regions"], 1);
    assert_eq!(value["reverse_regions"], 1);
    assert_eq!(value["pairs"][0]["regions"], 2);
}

#[test]
fn test_catalog_listing() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(
        &dir,
        "flanks.fa",
        ">a_F 100\nACGT\n>a_R 100\nTTGA\n>b_F 10 second amplicon\nGGCC\n>b_R 10\nCCAA\n",
    );

    flank_extract()
        .args(["--format", "tsv", "catalog"])
        .arg(&flanks)
        .assert()
        .success()
        .stdout(predicate::str::contains("a_F\ta_R\t100\t81-119\tACGT\tTTGA"))
        .stdout(predicate::str::contains("b_F\tb_R\t10\t1-29\tGGCC\tCCAA"));
}

#[test]
fn test_catalog_json() {
    let dir = TempDir::new().unwrap();
    let flanks = write_file(&dir, "flanks.fa", FLANKS);

    let output = flank_extract()
        .args(["catalog", "--format", "json"])
        .arg(&flanks)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name_left"], "amp_F");
    assert_eq!(value[0]["sequence_right"], "TTTT");
    assert_eq!(value[0]["expected_length"], 10);
}

#[test]
fn test_missing_flank_file() {
    let dir = TempDir::new().unwrap();
    let reads = write_file(&dir, "reads.fq", &fastq(&["ACGT"]));

    extract(
        &dir.path().join("missing.fa"),
        &reads,
        &dir.path().join("out.fa"),
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing.fa"));
}
