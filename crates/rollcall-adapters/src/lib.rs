//! Infrastructure adapters for Rollcall.
//!
//! This crate implements the ports defined in `rollcall-core`:
//!
//! - [`form::MemoryForm`] - in-memory form surface ([`FormView`])
//! - [`roster::MemoryRoster`] - in-memory append-only roster ([`RosterTable`])
//! - [`clock::SystemClock`] / [`clock::FixedClock`] - time sources ([`Clock`])
//! - [`render::render_roster`] - plain-text roster table rendering
//!
//! [`FormView`]: rollcall_core::application::ports::FormView
//! [`RosterTable`]: rollcall_core::application::ports::RosterTable
//! [`Clock`]: rollcall_core::application::ports::Clock

pub mod clock;
pub mod form;
pub mod render;
pub mod roster;

pub use clock::{FixedClock, SystemClock};
pub use form::MemoryForm;
pub use render::render_roster;
pub use roster::MemoryRoster;
