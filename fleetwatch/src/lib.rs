//! fleetwatch: terminal dashboard over a server-fleet monitoring HTTP API.
//!
//! The binary in `main.rs` wires these modules into a polling TUI; the
//! library exists so the derived-metric and export logic stays testable
//! without a terminal.

pub mod api;
pub mod app;
pub mod export;
pub mod health;
pub mod history;
pub mod profiles;
pub mod state;
pub mod types;
pub mod ui;
