//! Command implementations for the staffctl CLI

pub mod serve;

pub use serve::run_serve;
