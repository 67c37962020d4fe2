//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `token.rs` — base64/JSON token wire format + fingerprints.
//! - `validator.rs` — freshness + geofence verdicts (pure).
//! - `config.rs` — `campus.toml` loading, defaults and init.
//! - `storage.rs` — local state persistence, consumed-token ledger + audit log.
//! - `attendance.rs` — register upserts, listing and summaries.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod attendance;
pub mod config;
pub mod output;
pub mod storage;
pub mod token;
pub mod validator;
