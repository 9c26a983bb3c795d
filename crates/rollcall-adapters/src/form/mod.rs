//! Form surface adapters.

pub mod memory;

pub use memory::MemoryForm;
