// tabulog - lib.rs
//
// Library entry point, exposing the transformation core for integration
// testing and potential programmatic use. The CLI surface lives in main.rs
// and is not part of the library.

pub mod core;
pub mod util;
