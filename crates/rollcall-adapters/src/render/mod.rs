//! Roster rendering adapters.

pub mod text;

pub use text::render_roster;
