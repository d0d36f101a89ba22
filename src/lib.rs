// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together into the interactive
// gradebook.
//
// Module responsibilities:
// - `config`: Data-directory and log-level resolution from the
//   environment.
// - `user`: Account records, the role enum, and the authenticated
//   identity handed out at login.
// - `marks`: The grade scale, the per-student subject ledger, and the
//   marks-table line codec.
// - `store`: The flat-file tables and the in-memory record collections
//   loaded from them.
// - `auth`: Credential resolution against the store.
// - `ui`: Terminal primitives (screen clearing, headers, menus,
//   prompts).
// - `session`: The role-dispatched menu loops driving everything above.
//
// Keeping this separation makes it easier to test storage and
// authentication without a terminal attached.
pub mod auth;
pub mod config;
pub mod marks;
pub mod session;
pub mod store;
pub mod ui;
pub mod user;
