//! # Core Module
//!
//! The stateless foundation of the library: structure models, file I/O,
//! the fixed chemical name tables and vector geometry.
//!
//! - **Structure Representation** ([`models`]) - Atoms, residues, chains and systems
//! - **File I/O** ([`io`]) - PDB reading and result-table export
//! - **Chemical Names** ([`chemistry`]) - Cofactor, ring-nitrogen, donor and acceptor name sets
//! - **Geometry** ([`utils::geometry`]) - Normalization, vector angles and the cofactor plane angle

pub mod chemistry;
pub mod io;
pub mod models;
pub mod utils;
