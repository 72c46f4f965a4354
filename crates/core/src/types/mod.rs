//! Core types for Little Lemon.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod extra;
pub mod id;
pub mod menu;
pub mod price;

pub use extra::ProductExtra;
pub use id::MenuItemId;
pub use menu::MenuItem;
pub use price::Price;
