use slotmap::new_key_type;

new_key_type! {
    /// Stable handle of an atom inside a [`MolecularSystem`](super::system::MolecularSystem).
    pub struct AtomId;
    /// Stable handle of a residue; residue identity is compared through this key.
    pub struct ResidueId;
    pub struct ChainId;
}
