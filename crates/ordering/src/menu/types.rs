//! Wire types for the menu feed document.

use serde::Deserialize;

use little_lemon_core::{MenuItem, MenuItemId};

/// The whole feed document.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuResponse {
    /// Every dish currently on the menu.
    pub menu: Vec<MenuItemData>,
}

/// One dish record as it appears on the wire.
///
/// `price` stays text; it is unvalidated upstream and parsing is deferred
/// to pricing code.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemData {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

impl From<MenuItemData> for MenuItem {
    fn from(data: MenuItemData) -> Self {
        Self {
            id: MenuItemId::new(data.id),
            title: data.title,
            description: data.description,
            price: data.price,
            image: data.image,
            category: data.category,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "menu": [
            {
                "id": 1,
                "title": "Greek Salad",
                "description": "The famous greek salad of crispy lettuce, peppers, olives.",
                "price": "10",
                "image": "https://example.com/greekSalad.jpg",
                "category": "starters"
            },
            {
                "id": 2,
                "title": "Lemon Dessert",
                "description": "Traditional homemade Italian Lemon Ricotta Cake.",
                "price": "10",
                "image": "https://example.com/lemonDessert.jpg",
                "category": "desserts"
            }
        ]
    }"#;

    #[test]
    fn test_decode_feed_document() {
        let response: MenuResponse = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(response.menu.len(), 2);

        let first = response.menu.first().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.title, "Greek Salad");
        assert_eq!(first.price, "10");
        assert_eq!(first.category, "starters");
    }

    #[test]
    fn test_convert_to_menu_item() {
        let response: MenuResponse = serde_json::from_str(SAMPLE).unwrap();
        let items: Vec<MenuItem> = response.menu.into_iter().map(MenuItem::from).collect();

        let dessert = items.get(1).unwrap();
        assert_eq!(dessert.id, MenuItemId::new(2));
        assert_eq!(dessert.category, "desserts");
        assert_eq!(dessert.base_price().to_string(), "$10.00");
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let malformed = r#"{"menu": [{"id": 1, "title": "Greek Salad"}]}"#;
        assert!(serde_json::from_str::<MenuResponse>(malformed).is_err());
    }
}
