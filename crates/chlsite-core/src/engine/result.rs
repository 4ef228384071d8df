use super::classify::{Contact, SiteTally};
use super::error::EngineError;
use super::sites::Site;
use crate::core::models::site::{ContactAtom, Prediction, SiteResult};
use crate::core::models::system::MolecularSystem;

/// Per-site results of one run, in site discovery order.
pub type PredictionTable = Vec<SiteResult>;

fn contact_atom(system: &MolecularSystem, contact: &Contact) -> Result<ContactAtom, EngineError> {
    let atom = system.atom(contact.atom_id).ok_or_else(|| {
        EngineError::Internal(format!("contact atom {:?} is not in the system", contact.atom_id))
    })?;
    let residue = system.residue_of(contact.atom_id).ok_or_else(|| {
        EngineError::Internal(format!("atom '{}' has no parent residue", atom.name))
    })?;
    Ok(ContactAtom {
        atom_name: atom.name.clone(),
        residue_name: residue.name.clone(),
        residue_number: residue.id,
        chain_id: system.chain(residue.chain_id).map_or(' ', |chain| chain.id),
        distance: contact.distance,
    })
}

/// Builds the immutable result row for a site from its final tally.
pub fn assemble(
    system: &MolecularSystem,
    site: &Site,
    tally: &SiteTally,
) -> Result<SiteResult, EngineError> {
    let residue = system.residue(site.residue_id).ok_or_else(|| {
        EngineError::Internal(format!("site residue {:?} is not in the system", site.residue_id))
    })?;

    let donors = tally
        .donors()
        .iter()
        .map(|c| contact_atom(system, c))
        .collect::<Result<Vec<_>, _>>()?;
    let acceptors = tally
        .acceptors()
        .iter()
        .map(|c| contact_atom(system, c))
        .collect::<Result<Vec<_>, _>>()?;

    let balance = donors.len() as i64 - acceptors.len() as i64;
    Ok(SiteResult {
        cofactor_name: residue.name.clone(),
        residue_number: residue.id,
        chain_id: system.chain(residue.chain_id).map_or(' ', |chain| chain.id),
        donor_count: donors.len(),
        acceptor_count: acceptors.len(),
        balance,
        prediction: Prediction::from_balance(balance),
        mean_donor_distance: tally.mean_donor_distance(),
        mean_acceptor_distance: tally.mean_acceptor_distance(),
        donors,
        acceptors,
    })
}
