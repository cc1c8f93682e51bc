use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::catalog::store::FlankCatalog;
use crate::cli::catalog::accepted_window;
use crate::cli::OutputFormat;
use crate::extraction::engine::{
    ExtractionConfig, ExtractionEngine, DEFAULT_PROGRESS_INTERVAL, DEFAULT_TOLERANCE,
};
use crate::extraction::extractor::Extractor;
use crate::extraction::sink::{create_output, FastaRegionWriter};
use crate::extraction::stats::ExtractionStats;
use crate::parsing::fastq::FastqReads;

#[derive(Args)]
pub struct ExtractArgs {
    /// FASTA file of flank pairs (left then right; second header token is the expected length)
    #[arg(short, long, required = true)]
    pub flanks: PathBuf,

    /// FASTQ file of reads (plain or gzipped); use '-' for stdin
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Output FASTA file (gzipped if it ends in .gz); stdout if omitted or '-'
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accept regions whose length is strictly within expected ± tolerance
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u64,

    /// Log progress every N reads when verbose (0 disables)
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub progress_interval: u64,

    /// Write a run summary to this file, in the selected --format
    #[arg(long)]
    pub stats: Option<PathBuf>,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if the flank file is invalid, the reads cannot be parsed,
/// or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Validate the catalog before touching the reads or creating the output
    let catalog = FlankCatalog::load_from_file(&args.flanks)
        .with_context(|| format!("Invalid flank file {}", args.flanks.display()))?;

    info!(
        "Loaded {} flank pairs from {}",
        catalog.len(),
        args.flanks.display()
    );

    let config = ExtractionConfig {
        tolerance: args.tolerance,
        progress_interval: args.progress_interval,
    };
    let engine = ExtractionEngine::with_config(&catalog, config);
    if verbose {
        for pair in &catalog {
            info!(
                "{}: expected {} bp, accepting {} bp",
                pair.label(),
                pair.expected_length,
                accepted_window(pair, engine.gate())
            );
        }
    }

    let reads = FastqReads::open(&args.input)
        .with_context(|| format!("Failed to open reads {}", args.input.display()))?;
    let output = create_output(args.output.as_deref()).with_context(|| {
        format!(
            "Failed to create output {}",
            args.output
                .as_deref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string())
        )
    })?;

    let mut extractor = Extractor::new(engine, FastaRegionWriter::new(output));
    extractor
        .run(reads)
        .with_context(|| format!("Extraction from {} failed", args.input.display()))?;
    let (writer, stats) = extractor.finish()?;
    writer
        .into_inner()
        .finish()
        .context("Failed to finalize output")?;

    if let Some(path) = &args.stats {
        let summary = format_summary(&stats, &catalog, format)?;
        fs::write(path, summary)
            .with_context(|| format!("Failed to write stats to {}", path.display()))?;
    }

    Ok(())
}

/// Render the run summary in the requested format
fn format_summary(
    stats: &ExtractionStats,
    catalog: &FlankCatalog,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let summary = match format {
        OutputFormat::Text => format_text_summary(stats, catalog),
        OutputFormat::Json => format_json_summary(stats, catalog)?,
        OutputFormat::Tsv => format_tsv_summary(stats, catalog),
    };
    Ok(summary)
}

fn format_text_summary(stats: &ExtractionStats, catalog: &FlankCatalog) -> String {
    let mut out = String::new();
    out.push_str("Extraction Summary\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!("Reads processed:      {}\n", stats.reads_processed));
    out.push_str(&format!(
        "Reads with regions:   {} ({:.1}%)\n",
        stats.reads_with_regions,
        stats.yield_fraction() * 100.0
    ));
    out.push_str(&format!("Regions extracted:    {}\n", stats.regions_emitted));
    out.push_str(&format!("  Forward strand:     {}\n", stats.forward_regions));
    out.push_str(&format!("  Reverse strand:     {}\n", stats.reverse_regions));
    out.push_str(&format!("Rejected by length:   {}\n", stats.rejected_by_length));

    if !catalog.is_empty() {
        out.push_str("\nRegions per pair:\n");
        for (pair, count) in catalog.iter().zip(&stats.regions_per_pair) {
            out.push_str(&format!("  {:<40} {count}\n", pair.label()));
        }
    }
    out
}

fn format_json_summary(
    stats: &ExtractionStats,
    catalog: &FlankCatalog,
) -> anyhow::Result<String> {
    let pairs: Vec<_> = catalog
        .iter()
        .zip(&stats.regions_per_pair)
        .map(|(pair, count)| {
            serde_json::json!({
                "name_left": pair.name_left,
                "name_right": pair.name_right,
                "expected_length": pair.expected_length,
                "regions": count,
            })
        })
        .collect();

    let output = serde_json::json!({
        "reads_processed": stats.reads_processed,
        "reads_with_regions": stats.reads_with_regions,
        "regions_emitted": stats.regions_emitted,
        "forward_regions": stats.forward_regions,
        "reverse_regions": stats.reverse_regions,
        "rejected_by_length": stats.rejected_by_length,
        "pairs": pairs,
    });

    let mut text = serde_json::to_string_pretty(&output)?;
    text.push('\n');
    Ok(text)
}

fn format_tsv_summary(stats: &ExtractionStats, catalog: &FlankCatalog) -> String {
    let mut out = String::from("name_left\tname_right\texpected_length\tregions\n");
    for (pair, count) in catalog.iter().zip(&stats.regions_per_pair) {
        out.push_str(&format!(
            "{}\t{}\t{}\t{count}\n",
            pair.name_left, pair.name_right, pair.expected_length
        ));
    }
    out.push_str(&format!(
        "*\t*\t*\t{}\n# reads_processed={} reads_with_regions={} rejected_by_length={}\n",
        stats.regions_emitted,
        stats.reads_processed,
        stats.reads_with_regions,
        stats.rejected_by_length
    ));
    out
}
