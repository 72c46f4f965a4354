//! Little Lemon Core - Shared types library.
//!
//! This crate provides common types used across all Little Lemon components:
//! - `ordering` - Catalog, cart, and session logic
//! - `cli` - Command-line tools for inspecting the menu feed
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Menu items, decimal prices, add-ons, and type-safe IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
