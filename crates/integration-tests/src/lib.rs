//! Integration tests for Little Lemon.
//!
//! Cross-crate flow tests wiring the catalog, cart, and session together
//! with in-memory collaborators. No network or device storage is required;
//! the one live-feed test in `little-lemon-ordering` is `#[ignore]`d and
//! run manually.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p little-lemon-integration-tests
//! ```

use little_lemon_core::{MenuItem, MenuItemId};
use little_lemon_ordering::prefs::MemoryStore;
use little_lemon_ordering::{AppConfig, AppState};

/// A small menu in the shape the feed delivers.
#[must_use]
pub fn sample_menu() -> Vec<MenuItem> {
    let entry = |id: i32, title: &str, description: &str, price: &str, category: &str| MenuItem {
        id: MenuItemId::new(id),
        title: title.to_string(),
        description: description.to_string(),
        price: price.to_string(),
        image: format!("https://example.com/{id}.jpg"),
        category: category.to_string(),
    };

    vec![
        entry(
            1,
            "Greek Salad",
            "The famous greek salad of crispy lettuce, peppers, olives.",
            "$10",
            "starters",
        ),
        entry(
            2,
            "Lemon Dessert",
            "Traditional homemade Italian Lemon Ricotta Cake.",
            "$10",
            "desserts",
        ),
        entry(3, "Bruschetta", "Grilled bread with tomatoes.", "$7.50", "starters"),
        entry(4, "Pasta", "Penne with fried aubergines.", "$12.99", "mains"),
    ]
}

/// App state with default configuration, an in-memory preference store, and
/// the sample menu loaded.
#[must_use]
pub fn sample_state() -> AppState {
    let state = AppState::new(AppConfig::default(), Box::new(MemoryStore::new()));
    state.catalog().replace_all(sample_menu());
    state
}

/// App state restored from a pre-populated preference store.
#[must_use]
pub fn state_with_store(store: MemoryStore) -> AppState {
    AppState::new(AppConfig::default(), Box::new(store))
}
