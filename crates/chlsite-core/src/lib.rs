//! # CHLSITE Core Library
//!
//! Predicts whether chlorophyll-like cofactor sites in a protein structure are
//! favorable for the cofactor, from the balance of hydrogen-bond donors and
//! acceptors around each site.
//!
//! ## Architecture
//!
//! The library is organized in three layers:
//!
//! - **[`core`]: The Foundation.** Data models (`MolecularSystem`, `SiteResult`),
//!   vector geometry, the fixed chemistry name sets, and I/O (PDB reading, CSV export).
//!
//! - **[`engine`]: The Logic Core.** Neighbor search, site location, per-neighbor
//!   classification, the helix backbone exclusion and result assembly.
//!
//! - **[`workflows`]: The Public API.** The end-to-end prediction entry point that ties
//!   `engine` and `core` together.

pub mod core;
pub mod engine;
pub mod workflows;
