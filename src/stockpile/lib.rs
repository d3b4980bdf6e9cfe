//! # Stockpile Architecture
//!
//! Stockpile is a **UI-agnostic inventory library**. The CLI is just one
//! client of it; the core takes Rust arguments and returns Rust values.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
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
//! │  - Business logic: register, sell, restock, list, find,     │
//! │    export, config                                           │
//! │  - Loads the inventory, mutates it, writes it back in full  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (inventory.rs, sheet.rs, store/)            │
//! │  - Record store with monotonic id generation                │
//! │  - Spreadsheet codec and the InventoryStore backends        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The inventory is a flat CSV table (`Id, Nome, Quantidade, Preço`). It is
//! read in full at the start of an operation and rewritten in full after a
//! successful mutation. There is no append path, no write-ahead log, and no
//! concurrent-writer protection; one user drives one process at a time.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core could
//! serve a GUI or an HTTP layer.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`inventory`]: The record store and id generator
//! - [`sheet`]: The spreadsheet codec (fixed-column CSV)
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data type ([`model::Product`])
//! - [`config`]: Configuration management
//! - [`external`]: OS default-application file opening
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod external;
pub mod inventory;
pub mod model;
pub mod sheet;
pub mod store;
