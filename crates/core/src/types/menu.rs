//! Menu item record.

use serde::{Deserialize, Serialize};

use crate::types::id::MenuItemId;
use crate::types::price::Price;

/// A sellable menu entry.
///
/// Created in bulk when the menu feed is decoded and read-only afterwards;
/// a successful feed refresh replaces the whole catalog rather than
/// patching individual items.
///
/// `price` is kept as raw feed text so display code can show it verbatim;
/// [`MenuItem::base_price`] is the parsed value used for cart arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Feed-assigned unique identifier.
    pub id: MenuItemId,
    /// Display title, e.g. "Greek Salad".
    pub title: String,
    /// Longer display description.
    pub description: String,
    /// Price as decimal-as-text from the feed, possibly with a currency
    /// symbol. Unvalidated upstream.
    pub price: String,
    /// Opaque image URL.
    pub image: String,
    /// Free-form category label, e.g. "starters".
    pub category: String,
}

impl MenuItem {
    /// The price parsed as a currency amount.
    ///
    /// Malformed price text degrades to zero rather than failing the line
    /// it appears on.
    #[must_use]
    pub fn base_price(&self) -> Price {
        Price::parse_lenient(&self.price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(price: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(1),
            title: "Greek Salad".to_string(),
            description: "Crispy lettuce, peppers, olives.".to_string(),
            price: price.to_string(),
            image: "https://example.com/greek.jpg".to_string(),
            category: "starters".to_string(),
        }
    }

    #[test]
    fn test_base_price_parses_feed_text() {
        assert_eq!(item("10").base_price(), Price::parse_lenient("10"));
        assert_eq!(item("$12.99").base_price(), Price::parse_lenient("12.99"));
    }

    #[test]
    fn test_base_price_malformed_is_zero() {
        assert_eq!(item("n/a").base_price(), Price::ZERO);
    }
}
