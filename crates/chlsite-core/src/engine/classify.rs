use super::config::PredictionConfig;
use super::error::{EngineError, ResidueLabel};
use super::search::NeighborSearch;
use super::sites::Site;
use crate::core::chemistry::{
    MAGNESIUM, RING_NITROGEN_B, RING_NITROGEN_C, is_excluded_histidine_atom, is_ring_nitrogen,
    is_water,
};
use crate::core::models::atom::Atom;
use crate::core::models::ids::AtomId;
use crate::core::models::residue::Residue;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::geometry::{macrocycle_normal, plane_elevation_degrees};
use tracing::trace;

/// Hydrogen-bonding role assigned to a neighbor atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Donor,
    Acceptor,
}

/// A classified neighbor and its distance to the site's pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub atom_id: AtomId,
    pub distance: f64,
}

/// Running donor/acceptor bookkeeping for one site.
///
/// Counts are the lengths of the contact lists. The distance sums are kept
/// alongside and adjusted on removal, so the means are taken over whatever
/// remains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteTally {
    donors: Vec<Contact>,
    acceptors: Vec<Contact>,
    donor_distance_sum: f64,
    acceptor_distance_sum: f64,
}

impl SiteTally {
    pub fn record(&mut self, role: Role, contact: Contact) {
        match role {
            Role::Donor => {
                self.donor_distance_sum += contact.distance;
                self.donors.push(contact);
            }
            Role::Acceptor => {
                self.acceptor_distance_sum += contact.distance;
                self.acceptors.push(contact);
            }
        }
    }

    pub fn donors(&self) -> &[Contact] {
        &self.donors
    }

    pub fn acceptors(&self) -> &[Contact] {
        &self.acceptors
    }

    pub fn donor_count(&self) -> usize {
        self.donors.len()
    }

    pub fn acceptor_count(&self) -> usize {
        self.acceptors.len()
    }

    /// Removes the donor at `donor_index` and the acceptor at
    /// `acceptor_index`, subtracting their distances from the sums.
    ///
    /// Returns `None` and leaves the tally unchanged if either index is out of range.
    pub fn remove_pair(&mut self, donor_index: usize, acceptor_index: usize) -> Option<()> {
        if donor_index >= self.donors.len() || acceptor_index >= self.acceptors.len() {
            return None;
        }
        let donor = self.donors.remove(donor_index);
        let acceptor = self.acceptors.remove(acceptor_index);
        self.donor_distance_sum -= donor.distance;
        self.acceptor_distance_sum -= acceptor.distance;
        Some(())
    }

    pub fn mean_donor_distance(&self) -> f64 {
        mean(self.donor_distance_sum, self.donors.len())
    }

    pub fn mean_acceptor_distance(&self) -> f64 {
        mean(self.acceptor_distance_sum, self.acceptors.len())
    }
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn require_atom<'a>(
    system: &'a MolecularSystem,
    residue: &Residue,
    name: &str,
) -> Result<&'a Atom, EngineError> {
    residue
        .atom_id(name)
        .and_then(|id| system.atom(id))
        .ok_or_else(|| EngineError::MissingAtom {
            residue: ResidueLabel::of(system, residue),
            atom: name.to_string(),
        })
}

fn site_atoms<'a>(
    system: &'a MolecularSystem,
    site: &Site,
) -> Result<(&'a Residue, &'a Atom), EngineError> {
    let residue = system.residue(site.residue_id).ok_or_else(|| {
        EngineError::Internal(format!("site residue {:?} is not in the system", site.residue_id))
    })?;
    let pivot = system.atom(site.pivot_atom_id).ok_or_else(|| {
        EngineError::Internal(format!("site pivot {:?} is not in the system", site.pivot_atom_id))
    })?;
    Ok((residue, pivot))
}

/// Elevation in degrees of `probe` above the cofactor's MG/NC/NB plane, seen
/// from the site's pivot.
///
/// # Errors
///
/// [`EngineError::MissingAtom`] if the cofactor lacks MG, NC or NB, and
/// [`EngineError::DegenerateGeometry`] if the plane normal or the
/// pivot-to-probe vector has zero length.
pub fn plane_angle(
    system: &MolecularSystem,
    site: &Site,
    probe: &Atom,
) -> Result<f64, EngineError> {
    let (cofactor, pivot) = site_atoms(system, site)?;
    let mg = require_atom(system, cofactor, MAGNESIUM)?;
    let nc = require_atom(system, cofactor, RING_NITROGEN_C)?;
    let nb = require_atom(system, cofactor, RING_NITROGEN_B)?;

    let normal = macrocycle_normal(&mg.position, &nc.position, &nb.position);
    plane_elevation_degrees(&normal, &pivot.position, &probe.position).map_err(|source| {
        EngineError::DegenerateGeometry {
            residue: ResidueLabel::of(system, cofactor),
            atom: probe.name.clone(),
            source,
        }
    })
}

/// The plane-angle gate admits every neighbor regardless of the threshold.
fn passes_angle_gate(_angle: f64, _threshold: f64) -> bool {
    true
}

/// Assigns a role to one neighbor of a site, or `None` if it is not counted.
///
/// Donor names are tested before acceptor names. Water oxygens are donors
/// unconditionally and never need the plane angle.
pub fn classify_neighbor(
    system: &MolecularSystem,
    site: &Site,
    config: &PredictionConfig,
    atom: &Atom,
) -> Result<Option<Role>, EngineError> {
    if !atom.is_polar_heteroatom()
        || atom.residue_id == site.residue_id
        || is_ring_nitrogen(&atom.name)
    {
        return Ok(None);
    }
    let residue = system.residue(atom.residue_id).ok_or_else(|| {
        EngineError::Internal(format!("atom '{}' has no parent residue", atom.name))
    })?;

    if is_water(&residue.name) {
        return Ok(Some(Role::Donor));
    }
    if is_excluded_histidine_atom(&residue.name, &atom.name) {
        return Ok(None);
    }

    let angle = plane_angle(system, site, atom)?;
    trace!(
        atom = %atom.name,
        residue = %residue.name,
        angle,
        within_threshold = angle.abs() < config.angle_threshold,
        "Plane angle computed"
    );
    if !passes_angle_gate(angle, config.angle_threshold) {
        return Ok(None);
    }

    if config.lists.is_donor(&atom.name) {
        Ok(Some(Role::Donor))
    } else if config.lists.is_acceptor(&atom.name) {
        Ok(Some(Role::Acceptor))
    } else {
        Ok(None)
    }
}

/// Classifies all atoms within `config.radius` of the site's pivot.
///
/// The helix backbone exclusion is not applied here.
pub fn classify_site<S: NeighborSearch + ?Sized>(
    system: &MolecularSystem,
    search: &S,
    site: &Site,
    config: &PredictionConfig,
) -> Result<SiteTally, EngineError> {
    let (_, pivot) = site_atoms(system, site)?;
    let mut tally = SiteTally::default();

    for atom_id in search.within(&pivot.position, config.radius) {
        let atom = system.atom(atom_id).ok_or_else(|| {
            EngineError::Internal(format!("neighbor search returned unknown atom {atom_id:?}"))
        })?;
        if let Some(role) = classify_neighbor(system, site, config, atom)? {
            let distance = atom.distance(pivot);
            trace!(atom = %atom.name, ?role, distance, "Neighbor classified");
            tally.record(role, Contact { atom_id, distance });
        }
    }

    Ok(tally)
}
