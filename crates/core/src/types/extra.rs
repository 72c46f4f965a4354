//! Product add-on value object.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// An optional add-on for a menu item, with its own price.
///
/// Not persisted anywhere; constructed per product from a static lookup and
/// carried inside cart lines by value. Two extras with the same name are
/// the same extra for cart-dedup purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductExtra {
    /// Display name, e.g. "Parmesan".
    pub name: String,
    /// Add-on price; non-negative.
    pub price: Price,
}

impl ProductExtra {
    /// Create a new add-on.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
