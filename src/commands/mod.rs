//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `reproduce.rs` — throwaway-project reproduction of the shadowing
//!   failure (the default command).
//! - `diagnose.rs` — read-only shadow diagnosis of the current directory.
//!
//! ## Principles
//! - Parse/match CLI inputs in `main.rs`.
//! - Delegate procedure steps to `services/*`.
//! - Keep behavior and output schema stable.

pub mod diagnose;
pub mod reproduce;

pub use diagnose::handle_diagnose;
pub use reproduce::handle_reproduce;
