//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — boundary/config/attendance-register command trees.
//! - `runtime.rs` — issue/decode/verify/contains.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `geofence`.
//! - Keep behavior and output schema stable.

pub mod admin;
pub mod runtime;

pub use admin::{handle_attendance_commands, handle_boundary_commands, handle_config_commands};
pub use runtime::handle_runtime_commands;
