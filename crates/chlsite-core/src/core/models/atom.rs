use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents a single atom of a parsed macromolecular structure.
///
/// Atoms are read-only to the classification engine. They carry the identity
/// fields needed to match hydrogen-bond donor and acceptor names, the element
/// used for the O/N/S pre-filter, and the Cartesian position used for all
/// distance and plane-angle computations.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "N", "OG1", "MG").
    pub name: String,
    /// The upper-case element symbol (e.g., "O", "N", "MG").
    pub element: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The serial number from the source file, `0` if the atom was built in memory.
    pub serial: usize,
    /// The crystallographic occupancy, `1.0` unless read from a file.
    pub occupancy: f64,
    /// Alternate location indicator, if any.
    pub alt_loc: Option<char>,
}

impl Atom {
    /// Creates a new `Atom` with default values for the source-file fields.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `element` - The element symbol; it is stored upper-cased.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, element: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            element: element.trim().to_ascii_uppercase(),
            residue_id,
            position,
            serial: 0,
            occupancy: 1.0,
            alt_loc: None,
        }
    }

    /// Euclidean distance to another atom, in Angstroms.
    pub fn distance(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.position, &other.position)
    }

    /// Returns `true` for the hydrogen-bonding heteroatoms considered by the
    /// classifier (oxygen, nitrogen and sulfur).
    pub fn is_polar_heteroatom(&self) -> bool {
        matches!(self.element.as_str(), "O" | "N" | "S")
    }
}
