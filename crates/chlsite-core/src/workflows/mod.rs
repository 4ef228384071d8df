//! # Workflows Module
//!
//! High-level entry points that run a complete site classification.
//!
//! - **Prediction Workflow** ([`predict`]) - Indexes a structure, locates its
//!   cofactor sites and returns one verdict row per site, in discovery order.

pub mod predict;
