// tabulog - core/mod.rs
//
// Core transformation layer.
// Dependencies: standard library + regex only.
// Accepts Read/Write trait objects, never opens files directly.

pub mod clean;
pub mod model;
pub mod sheet;
pub mod stamp;
pub mod transform;
