//! Application layer - use cases and ports.
//!
//! This layer orchestrates the domain. It owns the port traits that the
//! outside world implements and the services that drive them. Nothing in
//! here touches a terminal, a clock, or any other real resource directly.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{Clock, FormView, RosterTable};
pub use services::{DEFAULT_TIMESTAMP_FORMAT, FormController, SubmitOutcome};
