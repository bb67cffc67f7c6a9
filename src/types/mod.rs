// Shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod favorite;
pub mod panel;
pub mod settings;
