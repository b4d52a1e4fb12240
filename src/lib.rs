//! # Staffdir Architecture
//!
//! Staffdir is a **UI-agnostic employee-directory library**. The interactive
//! menu binary is just one client of it; nothing inside the library knows
//! about terminals.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs, wired by main.rs)               │
//! │  - Renders the menu, prompts for lines, colors messages     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over a DataStore                     │
//! │  - Returns CmdResult values, never prints                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (CSV, production), InMemoryStore (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`), never writes to stdout/stderr, and never
//! calls `std::process::exit`. Domain conditions a user can recover from
//! (duplicate id, not found, bad salary) travel as leveled [`commands::CmdMessage`]s
//! inside a [`commands::CmdResult`]; only I/O and CSV failures are `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each menu command
//! - [`store`]: Storage abstraction, the insertion-ordered [`store::Roster`],
//!   and the CSV-backed [`store::fs::FileStore`]
//! - [`model`]: The [`model::Employee`] record and salary validation
//! - [`session`]: The interactive menu loop (generic over reader/writer so
//!   tests can script it)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
