pub mod config;
pub mod predict;
