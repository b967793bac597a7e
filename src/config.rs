//! Configuration loader and schema types.
//!
//! This module exposes the settings schema for the server and the music
//! library, plus helpers to load them from disk and the environment.

mod load;
mod schema;

pub use schema::*;
