//! Blockfall (workspace facade crate).
//!
//! The engine, input mapping and terminal rendering live in dedicated crates
//! under `crates/`; this package re-exports them as
//! `blockfall::{core, input, term, types}` and hosts the game binary.

pub mod config;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
