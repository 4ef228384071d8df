use super::classify::SiteTally;
use crate::core::chemistry::{BACKBONE_AMIDE_NITROGEN, BACKBONE_CARBONYL_OXYGEN, is_water};
use crate::core::models::system::MolecularSystem;
use tracing::debug;

/// Maximum N to O distance, exclusive, for a donor/acceptor pair to be taken
/// as a helix backbone hydrogen bond.
pub const HELIX_PAIR_DISTANCE: f64 = 4.0;

/// Finds the first backbone N donor / non-water O acceptor pair closer than
/// [`HELIX_PAIR_DISTANCE`], scanning donors then acceptors in list order.
///
/// Returns the pair as `(donor_index, acceptor_index)`.
pub fn find_backbone_pair(system: &MolecularSystem, tally: &SiteTally) -> Option<(usize, usize)> {
    tally
        .donors()
        .iter()
        .enumerate()
        .filter_map(|(index, contact)| {
            system
                .atom(contact.atom_id)
                .filter(|atom| atom.name == BACKBONE_AMIDE_NITROGEN)
                .map(|atom| (index, atom))
        })
        .find_map(|(donor_index, donor)| {
            tally
                .acceptors()
                .iter()
                .position(|contact| {
                    let Some(acceptor) = system.atom(contact.atom_id) else {
                        return false;
                    };
                    acceptor.name == BACKBONE_CARBONYL_OXYGEN
                        && system
                            .residue(acceptor.residue_id)
                            .is_some_and(|residue| !is_water(&residue.name))
                        && donor.distance(acceptor) < HELIX_PAIR_DISTANCE
                })
                .map(|acceptor_index| (donor_index, acceptor_index))
        })
}

/// Removes at most one backbone N/O pair from the tally.
///
/// Returns `true` if a pair was removed.
pub fn exclude_backbone_pair(system: &MolecularSystem, tally: &mut SiteTally) -> bool {
    match find_backbone_pair(system, tally) {
        Some((donor_index, acceptor_index)) => {
            debug!(donor_index, acceptor_index, "Excluding helix backbone pair");
            tally.remove_pair(donor_index, acceptor_index).is_some()
        }
        None => false,
    }
}
