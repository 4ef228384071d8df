use super::ids::{AtomId, ChainId};
use crate::core::chemistry;
use std::collections::HashMap;

/// Record class of a residue: polymer (`ATOM`), hetero group (`HETATM`) or water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResidueKind {
    #[default]
    Standard,
    Hetero,
    Water,
}

impl ResidueKind {
    /// Classifies a residue from its record type and residue name.
    pub fn from_record(record: &str, residue_name: &str) -> Self {
        if chemistry::is_water(residue_name) {
            ResidueKind::Water
        } else if record.trim() == "HETATM" {
            ResidueKind::Hetero
        } else {
            ResidueKind::Standard
        }
    }

    /// Hetero tag that, with chain, sequence number and insertion code,
    /// identifies a residue: empty for polymer residues, `W` for waters and
    /// `H_<name>` for hetero groups.
    pub fn het_field(self, residue_name: &str) -> String {
        match self {
            ResidueKind::Standard => String::new(),
            ResidueKind::Water => "W".to_string(),
            ResidueKind::Hetero => format!("H_{}", residue_name.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub id: isize,                          // Residue sequence number from source file
    pub insertion_code: Option<char>,       // PDB insertion code, if any
    pub kind: ResidueKind,                  // Polymer, hetero group or water
    pub name: String,                       // Name of the residue (e.g., "CLA", "HOH", "HIS")
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,          // Atoms in file order
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its stable ID
}

impl Residue {
    pub(crate) fn new(
        id: isize,
        insertion_code: Option<char>,
        kind: ResidueKind,
        name: &str,
        chain_id: ChainId,
    ) -> Self {
        Self {
            id,
            insertion_code,
            kind,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub(crate) fn replace_atom(&mut self, atom_name: &str, old_id: AtomId, new_id: AtomId) {
        if let Some(slot) = self.atoms.iter_mut().find(|id| **id == old_id) {
            *slot = new_id;
        }
        self.atom_name_map.insert(atom_name.to_string(), new_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn atom_id(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let chain_id = dummy_chain_id(1);
        let residue = Residue::new(601, None, ResidueKind::Hetero, "CLA", chain_id);
        assert_eq!(residue.id, 601);
        assert_eq!(residue.name, "CLA");
        assert_eq!(residue.chain_id, chain_id);
        assert!(residue.insertion_code.is_none());
        assert_eq!(residue.kind, ResidueKind::Hetero);
        assert!(residue.atoms().is_empty());
        assert!(residue.atom_id("MG").is_none());
    }

    #[test]
    fn add_atom_preserves_order_and_maps_name() {
        let mut residue = Residue::new(5, None, ResidueKind::Standard, "SER", dummy_chain_id(2));
        let n = dummy_atom_id(1);
        let og = dummy_atom_id(2);
        residue.add_atom("N", n);
        residue.add_atom("OG", og);

        assert_eq!(residue.atoms(), &[n, og]);
        assert_eq!(residue.atom_id("OG"), Some(og));
        assert_eq!(residue.atom_id("N"), Some(n));
    }

    #[test]
    fn replace_atom_keeps_position_in_order() {
        let mut residue = Residue::new(7, None, ResidueKind::Standard, "THR", dummy_chain_id(3));
        let n = dummy_atom_id(1);
        let og1_a = dummy_atom_id(2);
        let c = dummy_atom_id(3);
        let og1_b = dummy_atom_id(4);
        residue.add_atom("N", n);
        residue.add_atom("OG1", og1_a);
        residue.add_atom("C", c);

        residue.replace_atom("OG1", og1_a, og1_b);

        assert_eq!(residue.atoms(), &[n, og1_b, c]);
        assert_eq!(residue.atom_id("OG1"), Some(og1_b));
    }

    #[test]
    fn kind_follows_record_type_and_water_name() {
        assert_eq!(ResidueKind::from_record("ATOM  ", "ALA"), ResidueKind::Standard);
        assert_eq!(ResidueKind::from_record("HETATM", "CLA"), ResidueKind::Hetero);
        assert_eq!(ResidueKind::from_record("HETATM", "HOH"), ResidueKind::Water);
        assert_eq!(ResidueKind::Hetero.het_field("CLA"), "H_CLA");
        assert_eq!(ResidueKind::Water.het_field("HOH"), "W");
        assert_eq!(ResidueKind::Standard.het_field("ALA"), "");
    }

    #[test]
    fn atom_id_returns_none_for_unknown_name() {
        let mut residue = Residue::new(11, None, ResidueKind::Standard, "LEU", dummy_chain_id(6));
        residue.add_atom("CD1", dummy_atom_id(300));
        assert!(residue.atom_id("CD2").is_none());
    }
}
