//! # Contacts Architecture
//!
//! A small personal contact book: name/phone/email records kept in one JSON
//! file and managed through an interactive menu. The menu is only one client;
//! everything below it is plain library code.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, colored output                       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ContactBook: owns the in-memory collection               │
//! │  - Parses raw prompt input (delete index / cancel)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, search, delete, load                          │
//! │  - Returns CmdResult with listed contacts and messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The collection is read once when the book is opened and written back in
//! full after every add or delete. A failed write is reported as a message;
//! the in-memory collection stays authoritative for the rest of the session.
//!
//! ## Module Overview
//!
//! - [`api`]: `ContactBook`, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Contact` record
//! - [`index`]: 1-based display numbering and delete selection
//! - [`error`]: Error types
//! - `cli`: Menu loop and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
