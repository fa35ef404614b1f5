//! Terminal input module.
//!
//! This module is independent of any UI framework beyond crossterm's event
//! types. It maps key events into [`crate::types::Command`] values and
//! recognizes the quit keys. Terminal auto-repeat drives held keys, so there is
//! no separate repeat handler.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
