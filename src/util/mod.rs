// tabulog - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// No dependencies on the core layer.

pub mod constants;
pub mod error;
pub mod logging;
