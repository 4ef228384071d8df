use phf::{Set, phf_set};

/// Residue names recognized as chlorophyll-like cofactors.
pub static COFACTOR_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "CLA", "CL7", "F6C", "CHL",
};

/// Macrocycle nitrogens of the cofactor; never classified as neighbors.
pub static RING_NITROGEN_NAMES: Set<&'static str> = phf_set! {
    "NB", "NA", "NC", "ND",
};

/// Default hydrogen-bond donor atom names, in their canonical order.
pub const DEFAULT_DONOR_NAMES: &[&str] = &[
    "OMB", "N", "NE", "NH1", "NH2", "NE2", "ND2", "ND1", "NZ", "OG", "OG1", "NE1", "OH", "SG",
];

/// Default hydrogen-bond acceptor atom names, in their canonical order.
pub const DEFAULT_ACCEPTOR_NAMES: &[&str] = &[
    "O1A", "O2A", "O1D", "OBD", "OD1", "OD2", "OE1", "OE2", "NZ", "OG", "OG1", "NA", "NB", "NC",
    "ND", "O",
];

pub const WATER_RESIDUE_NAME: &str = "HOH";
pub const HISTIDINE_RESIDUE_NAME: &str = "HIS";

pub const BACKBONE_AMIDE_NITROGEN: &str = "N";
pub const BACKBONE_CARBONYL_OXYGEN: &str = "O";

/// Atoms of the cofactor defining its macrocycle plane.
pub const MAGNESIUM: &str = "MG";
pub const RING_NITROGEN_B: &str = "NB";
pub const RING_NITROGEN_C: &str = "NC";

pub fn is_cofactor_residue(residue_name: &str) -> bool {
    COFACTOR_RESIDUE_NAMES.contains(residue_name.trim())
}

pub fn is_ring_nitrogen(atom_name: &str) -> bool {
    RING_NITROGEN_NAMES.contains(atom_name.trim())
}

pub fn is_water(residue_name: &str) -> bool {
    residue_name.trim() == WATER_RESIDUE_NAME
}

/// Histidine side-chain nitrogens have an ambiguous protonation state and are
/// left out of classification; the backbone amide nitrogen stays eligible.
pub fn is_excluded_histidine_atom(residue_name: &str, atom_name: &str) -> bool {
    residue_name.trim() == HISTIDINE_RESIDUE_NAME && atom_name.trim() != BACKBONE_AMIDE_NITROGEN
}
