use crate::core::models::ids::AtomId;
use crate::core::models::system::MolecularSystem;
use kiddo::{KdTree, SquaredEuclidean};
use nalgebra::Point3;

/// Slack added to the k-d tree query radius; candidates are then filtered
/// with the exact `distance <= radius` test.
const QUERY_PADDING: f64 = 1e-6;

/// Fixed-radius spatial query over the atoms of a structure.
pub trait NeighborSearch {
    /// Returns every atom whose distance to `center` is at most `radius`,
    /// in structure traversal order.
    fn within(&self, center: &Point3<f64>, radius: f64) -> Vec<AtomId>;
}

/// [`NeighborSearch`] backed by a k-d tree built once over all atoms.
pub struct KdTreeSearch {
    tree: KdTree<f64, 3>,
    atom_ids: Vec<AtomId>,
    positions: Vec<Point3<f64>>,
}

impl KdTreeSearch {
    pub fn new(system: &MolecularSystem) -> Self {
        let (atom_ids, positions): (Vec<AtomId>, Vec<Point3<f64>>) = system
            .atoms_iter()
            .map(|(id, atom)| (id, atom.position))
            .unzip();
        let points: Vec<[f64; 3]> = positions.iter().map(|p| [p.x, p.y, p.z]).collect();
        let tree: KdTree<f64, 3> = (&points).into();
        Self {
            tree,
            atom_ids,
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.atom_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atom_ids.is_empty()
    }
}

impl NeighborSearch for KdTreeSearch {
    fn within(&self, center: &Point3<f64>, radius: f64) -> Vec<AtomId> {
        if self.is_empty() {
            return Vec::new();
        }
        let padded = radius + QUERY_PADDING;
        let mut indices: Vec<usize> = self
            .tree
            .within_unsorted::<SquaredEuclidean>(&[center.x, center.y, center.z], padded * padded)
            .into_iter()
            .map(|neighbour| neighbour.item as usize)
            .filter(|&index| nalgebra::distance(&self.positions[index], center) <= radius)
            .collect();
        indices.sort_unstable();
        indices.into_iter().map(|index| self.atom_ids[index]).collect()
    }
}
