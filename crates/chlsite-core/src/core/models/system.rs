use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::{Residue, ResidueKind};
use slotmap::SlotMap;
use std::collections::HashMap;

/// Lookup key of a residue: chain, hetero tag, sequence number and insertion code.
type ResidueKey = (ChainId, String, isize, Option<char>);

/// Represents a complete parsed structure as chains of residues of atoms.
///
/// Storage uses slot maps for stable ids; the traversal order (chain order,
/// then residue order within the chain, then atom order within the residue)
/// is kept explicitly and is the order every iterator of this type follows.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains.
    chains: SlotMap<ChainId, Chain>,
    /// Chains in the order they were first seen.
    chain_order: Vec<ChainId>,
    /// Lookup map for finding residues by their full key.
    residue_id_map: HashMap<ResidueKey, ResidueId>,
    /// Lookup map for finding chains by their single-character identifier.
    chain_id_map: HashMap<char, ChainId>,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves an immutable reference to a residue by its ID.
    ///
    /// # Return
    ///
    /// Returns `Some(&Residue)` if the residue exists, otherwise `None`.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns the parent residue of an atom.
    pub fn residue_of(&self, atom_id: AtomId) -> Option<&Residue> {
        self.atom(atom_id)
            .and_then(|atom| self.residues.get(atom.residue_id))
    }

    /// Number of atoms in the system.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns an iterator over chains in traversal order.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(|&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    /// Returns an iterator over residues in traversal order (chain by chain).
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.chains_iter().flat_map(move |(_, chain)| {
            chain
                .residues()
                .iter()
                .filter_map(move |&id| self.residues.get(id).map(|residue| (id, residue)))
        })
    }

    /// Returns an iterator over atoms in traversal order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.residues_iter().flat_map(move |(_, residue)| {
            residue
                .atoms()
                .iter()
                .filter_map(move |&id| self.atoms.get(id).map(|atom| (id, atom)))
        })
    }

    /// Adds a new chain to the system or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given ID already exists,
    /// it returns the existing chain ID without creating a duplicate.
    pub fn add_chain(&mut self, id: char) -> ChainId {
        if let Some(&existing) = self.chain_id_map.get(&id) {
            return existing;
        }
        let chain_id = self.chains.insert(Chain::new(id));
        self.chain_order.push(chain_id);
        self.chain_id_map.insert(id, chain_id);
        chain_id
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// This method is idempotent on `(chain, hetero tag, residue number, insertion code)`,
    /// so a polymer residue and a hetero group sharing a sequence number stay
    /// separate residues. The hetero tag of a hetero group includes its name.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (the chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        insertion_code: Option<char>,
        kind: ResidueKind,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, kind.het_field(name), residue_number, insertion_code);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, insertion_code, kind, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (the residue doesn't exist).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }
        atom.residue_id = residue_id;
        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);
        self.residues[residue_id].add_atom(&name, atom_id);
        Some(atom_id)
    }

    /// Replaces an existing atom of a residue with another conformer of the same name.
    ///
    /// The new atom takes the old atom's place in the residue's atom order.
    ///
    /// # Return
    ///
    /// Returns the ID of the new atom, or `None` if `old_id` does not exist.
    pub fn replace_atom(&mut self, old_id: AtomId, mut atom: Atom) -> Option<AtomId> {
        let old = self.atoms.remove(old_id)?;
        atom.residue_id = old.residue_id;
        let name = atom.name.clone();
        let new_id = self.atoms.insert(atom);
        if let Some(residue) = self.residues.get_mut(old.residue_id) {
            residue.replace_atom(&name, old_id, new_id);
        }
        Some(new_id)
    }
}
