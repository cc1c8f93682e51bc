//! Command-line interface for flank-extract.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **extract**: Extract flank-bounded regions from a FASTQ file
//! - **catalog**: Validate a flank file and list its pairs
//!
//! ## Usage
//!
//! ```text
//! # Extract regions into a FASTA file
//! flank-extract extract -f flanks.fa -i reads.fastq.gz -o regions.fa
//!
//! # Stream from stdin to stdout with a narrower tolerance
//! zcat reads.fastq.gz | flank-extract extract -f flanks.fa -i - -t 10 > regions.fa
//!
//! # Write a JSON run summary alongside the regions
//! flank-extract --format json extract -f flanks.fa -i reads.fq -o regions.fa --stats run.json
//!
//! # Check a flank file
//! flank-extract catalog flanks.fa
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod extract;

#[derive(Parser)]
#[command(name = "flank-extract")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Extract target regions bounded by known flank pairs from sequencing reads")]
#[command(
    long_about = "flank-extract pulls the variable region between two known flanking sequences out of every read.\n\nFor each read and each flank pair it:\n- Finds both flanks on the forward strand and on the reverse complement\n- Keeps the region between them if its length is within the pair's tolerance window\n- Writes accepted regions as FASTA records named Read_0, Read_1, ..."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format for summaries and listings
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract flank-bounded regions from reads
    Extract(extract::ExtractArgs),

    /// Validate a flank file and list its pairs
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
