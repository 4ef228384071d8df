use super::error::{EngineError, ResidueLabel};
use crate::core::chemistry::is_cofactor_residue;
use crate::core::models::ids::{AtomId, ResidueId};
use crate::core::models::system::MolecularSystem;

/// A cofactor residue together with the atom its neighbor sphere is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    pub residue_id: ResidueId,
    pub pivot_atom_id: AtomId,
}

/// Finds every cofactor residue of the structure, in traversal order.
///
/// # Errors
///
/// Returns [`EngineError::MissingAtom`] if a cofactor residue has no atom
/// named `pivot_atom_name`. A structure without cofactors yields an empty list.
pub fn locate_sites(
    system: &MolecularSystem,
    pivot_atom_name: &str,
) -> Result<Vec<Site>, EngineError> {
    system
        .residues_iter()
        .filter(|(_, residue)| is_cofactor_residue(&residue.name))
        .map(|(residue_id, residue)| {
            let pivot_atom_id =
                residue
                    .atom_id(pivot_atom_name)
                    .ok_or_else(|| EngineError::MissingAtom {
                        residue: ResidueLabel::of(system, residue),
                        atom: pivot_atom_name.to_string(),
                    })?;
            Ok(Site {
                residue_id,
                pivot_atom_id,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::residue::ResidueKind;
    use crate::engine::fixtures::{SiteFixture, near};
    use nalgebra::Point3;

    #[test]
    fn locates_each_cofactor_variant_in_order() {
        let mut fixture = SiteFixture::new("CLA");
        let chain_b = fixture.system.add_chain('B');
        let mut second = None;
        for (number, name) in [(700, "ALA"), (701, "CHL"), (702, "HOH")] {
            let residue = fixture
                .system
                .add_residue(chain_b, number, None, ResidueKind::Hetero, name)
                .unwrap();
            let atom = fixture
                .system
                .add_atom_to_residue(residue, Atom::new("CMB", "C", residue, Point3::origin()))
                .unwrap();
            if name == "CHL" {
                second = Some(Site {
                    residue_id: residue,
                    pivot_atom_id: atom,
                });
            }
        }

        let sites = locate_sites(&fixture.system, "CMB").unwrap();
        assert_eq!(
            sites,
            vec![
                Site {
                    residue_id: fixture.cofactor,
                    pivot_atom_id: fixture.pivot,
                },
                second.unwrap(),
            ]
        );
    }

    #[test]
    fn structure_without_cofactors_yields_no_sites() {
        let mut system = MolecularSystem::new();
        let chain = system.add_chain('A');
        let residue = system.add_residue(chain, 1, None, ResidueKind::Standard, "GLY").unwrap();
        system
            .add_atom_to_residue(residue, Atom::new("CMB", "C", residue, Point3::origin()))
            .unwrap();
        assert!(locate_sites(&system, "CMB").unwrap().is_empty());
    }

    #[test]
    fn missing_pivot_is_an_error() {
        let mut fixture = SiteFixture::new("F6C");
        fixture.add_atom("HOH", 900, "O", "O", near(0.0, 0.0, 2.0));

        let err = locate_sites(&fixture.system, "C1").unwrap_err();
        match err {
            EngineError::MissingAtom { residue, atom } => {
                assert_eq!(residue.name, "F6C");
                assert_eq!(residue.chain_id, 'A');
                assert_eq!(residue.residue_number, 601);
                assert_eq!(atom, "C1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
