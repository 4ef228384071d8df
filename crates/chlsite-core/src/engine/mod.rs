//! # Engine Module
//!
//! Classification of cofactor binding sites by their hydrogen-bond
//! donor/acceptor environment.
//!
//! ## Overview
//!
//! A site is a chlorophyll-like cofactor residue together with a pivot atom.
//! Polar atoms within a fixed radius of the pivot are classified as donors or
//! acceptors by name. An optional pass then drops one backbone N/O pair that
//! most likely belongs to a helix hydrogen bond rather than to the site, and
//! the remaining balance decides the verdict.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Pivot atom, radius, name lists and switches
//! - **Neighbor Search** ([`search`]) - Fixed-radius queries over the structure
//! - **Site Location** ([`sites`]) - Enumeration of cofactor residues and their pivots
//! - **Classification** ([`classify`]) - Per-neighbor donor/acceptor assignment and the plane angle
//! - **Helix Exclusion** ([`helix`]) - Removal of a backbone amide/carbonyl pair
//! - **Results** ([`result`]) - Assembly of the per-site verdict
//! - **Progress Monitoring** ([`progress`]) - Progress reporting callbacks
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod classify;
pub mod config;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod helix;
pub mod progress;
pub mod result;
pub mod search;
pub mod sites;
