//! Remote menu feed: wire types and fetch client.
//!
//! The feed is a single JSON document shaped as
//! `{"menu": [{id, title, description, price, image, category}, ...]}`.
//! The client downloads and decodes it, converts the records into core
//! [`little_lemon_core::MenuItem`] values, and hands them to the catalog in
//! one atomic replacement. Transport mechanics stay inside this module.

mod fetch;
mod types;

pub use fetch::{MenuClient, MenuFeedError, spawn_refresh};
pub use types::{MenuItemData, MenuResponse};
