use crate::cli::PredictArgs;
use crate::config::PartialPredictionConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use chlsite::{
    core::io::{pdb::PdbFile, table::SiteTable, traits::MolecularFile},
    core::models::site::SiteResult,
    engine::progress::ProgressReporter,
    workflows,
};
use std::fmt::Write as _;
use tracing::{info, warn};

pub fn run(args: PredictArgs, show_progress: bool) -> Result<()> {
    let partial_config = PartialPredictionConfig::load(&args)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    info!("Loading input structure from {:?}", &args.input);
    let (system, metadata) =
        PdbFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;
    if metadata.truncated_models {
        warn!("Input contains several models; only the first one is classified.");
    }
    if metadata.discarded_alt_locs > 0 {
        info!(
            "Kept the highest-occupancy conformer; {} alternate location record(s) dropped.",
            metadata.discarded_alt_locs
        );
    }

    let progress_handler = if show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core prediction workflow...");
    let table = workflows::predict::run(&system, &config, &reporter)?;
    let verdicts = progress_handler.verdicts();
    info!(
        cofactor = verdicts.cofactor,
        not_cofactor = verdicts.not_cofactor,
        ambiguous = verdicts.ambiguous,
        "Classified {} site(s).",
        table.len()
    );

    if table.is_empty() {
        warn!("No cofactor sites were found in {:?}.", &args.input);
    }

    match &args.output {
        Some(path) => {
            SiteTable::write_csv_to_path(&table, path)?;
            println!("✓ {} site(s) written to: {}", table.len(), path.display());
        }
        None => print!("{}", format_summary(&table)),
    }

    Ok(())
}

/// Renders the results as an aligned text table for the terminal.
pub fn format_summary(results: &[SiteResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:>5} {:>8} {:>7} {:>9} {:>7}  {:<12} {:>8} {:>8}",
        "COFACTOR", "CHAIN", "RESIDUE", "DONORS", "ACCEPTORS", "BALANCE", "PREDICTION", "D_MEAN", "A_MEAN"
    );
    for result in results {
        let _ = writeln!(
            out,
            "{:<8} {:>5} {:>8} {:>7} {:>9} {:>7}  {:<12} {:>8.3} {:>8.3}",
            result.cofactor_name,
            result.chain_id,
            result.residue_number,
            result.donor_count,
            result.acceptor_count,
            result.balance,
            result.prediction.as_str(),
            result.mean_donor_distance,
            result.mean_acceptor_distance,
        );
    }
    out
}
