use crate::core::models::atom::Atom;
use crate::core::models::ids::{AtomId, ChainId, ResidueId};
use crate::core::models::residue::ResidueKind;
use crate::core::models::system::MolecularSystem;
use nalgebra::Point3;

pub(crate) const COFACTOR_NUMBER: isize = 601;

/// Pivot position of the fixture cofactor; the ring lies in the z = 0 plane,
/// far enough away that no ring atom falls inside a 4 A sphere around it.
pub(crate) fn pivot() -> Point3<f64> {
    Point3::new(20.0, 0.0, 0.0)
}

/// Offset from the pivot.
pub(crate) fn near(dx: f64, dy: f64, dz: f64) -> Point3<f64> {
    pivot() + nalgebra::Vector3::new(dx, dy, dz)
}

pub(crate) struct SiteFixture {
    pub system: MolecularSystem,
    pub chain: ChainId,
    pub cofactor: ResidueId,
    pub pivot: AtomId,
}

impl SiteFixture {
    /// A chain 'A' holding one cofactor residue with MG, the four ring
    /// nitrogens and a `CMB` pivot atom.
    pub fn new(cofactor_name: &str) -> Self {
        Self::without(cofactor_name, &[])
    }

    /// Same as [`SiteFixture::new`] but leaves out the named ring atoms.
    pub fn without(cofactor_name: &str, omitted: &[&str]) -> Self {
        let mut system = MolecularSystem::new();
        let chain = system.add_chain('A');
        let cofactor = system
            .add_residue(chain, COFACTOR_NUMBER, None, ResidueKind::Hetero, cofactor_name)
            .unwrap();
        let ring = [
            ("MG", "MG", Point3::new(0.0, 0.0, 0.0)),
            ("NA", "N", Point3::new(2.0, 0.0, 0.0)),
            ("NB", "N", Point3::new(0.0, 2.0, 0.0)),
            ("NC", "N", Point3::new(-2.0, 0.0, 0.0)),
            ("ND", "N", Point3::new(0.0, -2.0, 0.0)),
        ];
        for (name, element, position) in ring {
            if omitted.contains(&name) {
                continue;
            }
            system
                .add_atom_to_residue(cofactor, Atom::new(name, element, cofactor, position))
                .unwrap();
        }
        let pivot = system
            .add_atom_to_residue(cofactor, Atom::new("CMB", "C", cofactor, pivot()))
            .unwrap();
        Self {
            system,
            chain,
            cofactor,
            pivot,
        }
    }

    /// Adds an atom to residue `residue_number` of chain 'A', creating the residue if needed.
    pub fn add_atom(
        &mut self,
        residue_name: &str,
        residue_number: isize,
        atom_name: &str,
        element: &str,
        position: Point3<f64>,
    ) -> AtomId {
        let kind = ResidueKind::from_record("ATOM", residue_name);
        let residue = self
            .system
            .add_residue(self.chain, residue_number, None, kind, residue_name)
            .unwrap();
        self.system
            .add_atom_to_residue(residue, Atom::new(atom_name, element, residue, position))
            .unwrap()
    }
}
