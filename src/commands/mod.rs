//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `audit.rs` — verify/doctor command trees.
//! - `inspect.rs` — policy/snapshot read-only views.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod audit;
pub mod inspect;

pub use audit::handle_audit_commands;
pub use inspect::handle_inspect_commands;
