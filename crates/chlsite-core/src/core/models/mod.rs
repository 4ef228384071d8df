//! # Core Models Module
//!
//! Data structures representing a parsed macromolecular structure: a
//! [`system::MolecularSystem`] of chains, residues and atoms addressed through
//! stable slot-map ids.
//!
//! The models are read-only inputs to the site classification engine. Residues
//! expose explicit name-keyed atom lookup so that missing atoms surface as
//! typed errors rather than generic faults, and every iterator follows the
//! structure traversal order (chain, then residue, then atom).
//!
//! ## Key Components
//!
//! - [`atom`] - Atom identity, element, position and distance operators
//! - [`residue`] - Residue with ordered atoms, atom-name lookup and record kind
//! - [`chain`] - Ordered residue list of one chain
//! - [`system`] - The complete structure with traversal-ordered iteration
//! - [`site`] - Per-site classification results and the prediction verdict
//! - [`ids`] - Stable identifier types for atoms, residues, and chains
//!
//! ## Usage
//!
//! ```ignore
//! use chlsite::core::models::{atom::Atom, residue::ResidueKind, system::MolecularSystem};
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain('A');
//! let residue_id = system
//!     .add_residue(chain_id, 601, None, ResidueKind::Hetero, "CLA")
//!     .unwrap();
//! let atom = Atom::new("MG", "MG", residue_id, Point3::new(0.0, 0.0, 0.0));
//! system.add_atom_to_residue(residue_id, atom);
//! ```

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod site;
pub mod system;
