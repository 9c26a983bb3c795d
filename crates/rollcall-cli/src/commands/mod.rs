//! Command handlers.
//!
//! Each submodule owns one subcommand: wire the adapters, call the core,
//! render the result.

pub mod check;
pub mod completions;
pub mod config;
pub mod session;
pub mod submit;
