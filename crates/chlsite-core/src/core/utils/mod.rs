//! Stateless helpers shared by the engine.

pub mod geometry;
