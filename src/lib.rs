//! Azul in the terminal
//!
//! Re-exports the rules engine and the AI opponents, and adds the terminal
//! front end shared by the binaries.

pub mod display;
pub mod human;

pub use azul_ai as ai;
pub use azul_engine::*;
