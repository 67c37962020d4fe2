//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep token, verdict, register and report structs in one place.
//! - Avoid cyclic imports between the core (`geofence`, `services::validator`)
//!   and the host side (`services::storage`, `commands/*`).
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — coordinates, tokens, verdicts, register/ledger state, reports.
//! - `constants.rs` — reference campus polygon and default validity window.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/clock side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and the token wire format.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
