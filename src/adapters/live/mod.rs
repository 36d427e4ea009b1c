//! Live adapters for real file-system interactions.

pub mod filesystem;
pub mod platform;
