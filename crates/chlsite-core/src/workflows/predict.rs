use crate::core::models::site::SiteResult;
use crate::core::models::system::MolecularSystem;
use crate::engine::classify::classify_site;
use crate::engine::config::{DEFAULT_ANGLE_THRESHOLD_DEGREES, PredictionConfig};
use crate::engine::error::EngineError;
use crate::engine::helix::exclude_backbone_pair;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::result::{PredictionTable, assemble};
use crate::engine::search::{KdTreeSearch, NeighborSearch};
use crate::engine::sites::{Site, locate_sites};
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[instrument(skip_all, name = "prediction_workflow")]
pub fn run(
    system: &MolecularSystem,
    config: &PredictionConfig,
    reporter: &ProgressReporter,
) -> Result<PredictionTable, EngineError> {
    // === Phase 1: Index the structure and locate sites ===
    reporter.report(Progress::PhaseStart {
        name: "Locating Sites",
    });
    if config.angle_threshold != DEFAULT_ANGLE_THRESHOLD_DEGREES {
        warn!(
            "Angle threshold is set to {} degrees, but the plane-angle filter does not exclude neighbors.",
            config.angle_threshold
        );
    }

    let search = KdTreeSearch::new(system);
    let sites = locate_sites(system, &config.pivot_atom_name)?;
    info!(
        "Indexed {} atoms; found {} cofactor site(s) with pivot atom '{}'.",
        search.len(),
        sites.len(),
        config.pivot_atom_name
    );
    reporter.report(Progress::PhaseFinish);

    // === Phase 2: Classify every site ===
    reporter.report(Progress::PhaseStart {
        name: "Classifying Sites",
    });
    reporter.report(Progress::TaskStart {
        total_steps: sites.len() as u64,
    });

    let classify_one = |site: &Site| -> Result<SiteResult, EngineError> {
        let result = predict_site(system, &search, site, config)?;
        reporter.report(Progress::SiteFinished {
            cofactor: result.cofactor_name.clone(),
            chain_id: result.chain_id,
            residue_number: result.residue_number,
            prediction: result.prediction,
        });
        Ok(result)
    };

    #[cfg(not(feature = "parallel"))]
    let table = sites
        .iter()
        .map(classify_one)
        .collect::<Result<PredictionTable, _>>()?;

    #[cfg(feature = "parallel")]
    let table = sites
        .par_iter()
        .map(classify_one)
        .collect::<Result<PredictionTable, _>>()?;

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    info!("Workflow complete. Classified {} site(s).", table.len());
    Ok(table)
}

/// Classifies a single site, applying the helix exclusion when enabled.
pub fn predict_site<S: NeighborSearch + ?Sized>(
    system: &MolecularSystem,
    search: &S,
    site: &Site,
    config: &PredictionConfig,
) -> Result<SiteResult, EngineError> {
    let mut tally = classify_site(system, search, site, config)?;
    if config.exclude_alpha_helix {
        exclude_backbone_pair(system, &mut tally);
    }
    let result = assemble(system, site, &tally)?;
    debug!(
        cofactor = %result.cofactor_name,
        chain = %result.chain_id,
        residue = result.residue_number,
        donors = result.donor_count,
        acceptors = result.acceptor_count,
        prediction = %result.prediction,
        "Site classified"
    );
    Ok(result)
}
