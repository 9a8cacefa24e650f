//! # addrbook
//!
//! A single-user address book driven by one-line text commands:
//! `add John Doe p/98765432 e/john@x.com a/Blk 1`, `find john`, `delete 1`.
//!
//! ## Architecture
//!
//! ```text
//! input line ─► parser ─► Command ─► commands::<name>::run ─► CmdResult
//!                              │                 │
//!                              │          AddressBook (book)
//!                              │                 │
//!                            logic ─────────► Storage (store)
//! ```
//!
//! - **[`parser`]**: text to a validated [`commands::Command`]. Malformed
//!   input becomes `Command::Incorrect`, never an error.
//! - **[`commands`]**: one module per command. Commands return structured
//!   [`commands::CmdResult`]s and never print.
//! - **[`book`]**: the [`book::AddressBook`] aggregate and its uniqueness
//!   and atomicity rules.
//! - **[`index`]**: 1-based display indexes into the last listing shown.
//! - **[`logic`]**: [`logic::Logic`], the session controller. Parses,
//!   executes, saves, and remembers listings.
//! - **[`store`]**: the [`store::Storage`] trait with JSON-file and
//!   in-memory implementations.
//!
//! The binary in `main.rs` adds configuration loading, logging and the
//! interactive loop on top of [`logic::Logic`].

pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logic;
pub mod model;
pub mod parser;
pub mod store;
pub mod tags;
