//! Provides input/output functionality for structure files and result tables.
//!
//! Structures are read through the [`traits::MolecularFile`] interface; the
//! [`pdb`] module implements it for the PDB format. Classification results
//! are exported as delimited text by [`table`].

pub mod pdb;
pub mod table;
pub mod traits;
