//! Roster table adapters.

pub mod memory;

pub use memory::MemoryRoster;
