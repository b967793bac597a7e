//! Local track catalog endpoint.
//!
//! Lists a music directory, reads the tags of every audio file concurrently
//! and serves the result as JSON for a browser player.

pub mod cli;
pub mod config;
pub mod library;
pub mod logging;
pub mod server;
