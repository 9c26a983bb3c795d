//! Rollcall Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Rollcall
//! registration tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          rollcall-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (FormController)              │
//! │      Orchestrates Submit / Reset        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: FormView, RosterTable, Clock) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    rollcall-adapters (Infrastructure)   │
//! │   (MemoryForm, MemoryRoster, Clocks)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Field, Validators, ValidationReport)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```text
//! // Build a controller with injected adapters, then drive it.
//! let controller = FormController::new(view, roster, clock);
//! match controller.handle_submit()? {
//!     SubmitOutcome::Accepted(row) => println!("{}", row.name()),
//!     SubmitOutcome::Rejected(report) => eprintln!("{} failures", report.len()),
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FormController, SubmitOutcome,
        ports::{Clock, FormView, RosterTable},
    };
    pub use crate::domain::{
        DomainError, Field, RegistrationInput, Submission, ValidationReport,
        validators::validate_registration,
    };
    pub use crate::error::{RollcallError, RollcallResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
