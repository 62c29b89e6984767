//! # Postboard Architecture
//!
//! Postboard is a **UI-agnostic dashboard library** for two related resources,
//! posts and comments, served by a json-server style REST API. The terminal
//! client in `cli/` is one way to drive it; nothing below the CLI knows about
//! a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes raw form input into typed drafts              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Id allocation, post and comment lifecycle rules          │
//! │  - Reloads the affected table after every mutation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait: one method per REST endpoint          │
//! │  - HttpStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Record Lifecycles
//!
//! - **Posts** are created active with an allocated id, replaced in full on
//!   update, and toggled between Active and Deleted with a partial update.
//!   They are never removed.
//! - **Comments** must reference an existing post when written, are replaced
//!   in full on update, and are removed for good on delete.
//!
//! ## Errors
//!
//! Aborted operations (missing update target, missing post reference) return
//! `Err`. A write the server refuses does not: the command reports it in
//! [`commands::CmdResult::rejections`] and still returns the reloaded table.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Resource client abstraction and implementations
//! - [`model`]: Records (`Post`, `Comment`) and the `Resource` names
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
