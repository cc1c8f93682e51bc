use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::catalog::store::FlankCatalog;
use crate::cli::OutputFormat;
use crate::core::flank::FlankPair;
use crate::extraction::engine::DEFAULT_TOLERANCE;
use crate::extraction::gate::LengthGate;

#[derive(Args)]
pub struct CatalogArgs {
    /// FASTA file of flank pairs to validate and list
    #[arg(required = true)]
    pub flanks: PathBuf,

    /// Tolerance used to report each pair's accepted region lengths
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u64,
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the flank file cannot be read or fails validation.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = FlankCatalog::load_from_file(&args.flanks)
        .with_context(|| format!("Invalid flank file {}", args.flanks.display()))?;
    let gate = LengthGate::new(args.tolerance);

    if verbose {
        eprintln!(
            "Loaded {} flank pairs from {}",
            catalog.len(),
            args.flanks.display()
        );
    }

    match format {
        OutputFormat::Text => print_text_catalog(&catalog, &gate),
        OutputFormat::Json => println!("{}", catalog.to_json()?),
        OutputFormat::Tsv => print_tsv_catalog(&catalog, &gate),
    }

    Ok(())
}

/// Accepted length window as `min-max`, or `none` when nothing can pass
/// Accepted length window as `min-max`, or `none` when nothing passes
pub(crate) fn accepted_window(pair: &FlankPair, gate: &LengthGate) -> String {
    let range = gate.accepted_lengths(pair.expected_length);
    if range.is_empty() {
        "none".to_string()
    } else {
        format!("{}-{}", range.start(), range.end())
    }
}

fn print_text_catalog(catalog: &FlankCatalog, gate: &LengthGate) {
    println!(
        "{:<20} {:<20} {:>10} {:>12}  Flanks",
        "Left", "Right", "Expected", "Accepted"
    );
    println!("{}", "-".repeat(90));

    for pair in catalog {
        println!(
            "{:<20} {:<20} {:>10} {:>12}  {} ... {}",
            pair.name_left,
            pair.name_right,
            pair.expected_length,
            accepted_window(pair, gate),
            pair.sequence_left,
            pair.sequence_right,
        );
    }

    println!(
        "\nTotal: {} pairs (tolerance {})",
        catalog.len(),
        gate.tolerance()
    );
}

fn print_tsv_catalog(catalog: &FlankCatalog, gate: &LengthGate) {
    println!("name_left\tname_right\texpected_length\taccepted\tsequence_left\tsequence_right");
    for pair in catalog {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            pair.name_left,
            pair.name_right,
            pair.expected_length,
            accepted_window(pair, gate),
            pair.sequence_left,
            pair.sequence_right,
        );
    }
}
