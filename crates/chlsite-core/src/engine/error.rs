use std::fmt;
use thiserror::Error;

use crate::core::models::residue::Residue;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::geometry::GeometryError;

/// Human-readable identity of a residue, used in error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueLabel {
    pub name: String,
    pub chain_id: char,
    pub residue_number: isize,
}

impl ResidueLabel {
    pub fn of(system: &MolecularSystem, residue: &Residue) -> Self {
        Self {
            name: residue.name.clone(),
            chain_id: system.chain(residue.chain_id).map_or(' ', |chain| chain.id),
            residue_number: residue.id,
        }
    }
}

impl fmt::Display for ResidueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.name, self.chain_id, self.residue_number)
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Residue {residue} has no atom named '{atom}'")]
    MissingAtom { residue: ResidueLabel, atom: String },

    #[error("Degenerate geometry at residue {residue} (probe atom '{atom}'): {source}")]
    DegenerateGeometry {
        residue: ResidueLabel,
        atom: String,
        #[source]
        source: GeometryError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
