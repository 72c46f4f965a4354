//! In-memory menu catalog.
//!
//! The app starts with an empty catalog. The feed client fetches the menu on
//! its own task and swaps the full item list in atomically when it arrives;
//! readers observe either the old catalog or the new one, never a mix.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use little_lemon_core::{MenuItem, MenuItemId};

/// The full set of menu items for the current app run.
///
/// Cheaply cloneable; all clones share one underlying catalog. Queries are
/// linear scans over a snapshot - the menu is a few dozen items, not a
/// search corpus.
#[derive(Clone, Default)]
pub struct MenuCatalog {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl MenuCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Writers only ever assign a fully built Vec, so even a poisoned lock
    // still holds a complete catalog snapshot and can be recovered.
    fn read(&self) -> RwLockReadGuard<'_, Vec<MenuItem>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<MenuItem>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the entire catalog with `items`.
    ///
    /// Wholesale replacement: no merge with prior contents, no partial
    /// state. An empty sequence empties the catalog. Malformed upstream
    /// records are the feed client's concern; anything that decodes to a
    /// [`MenuItem`] is accepted here.
    pub fn replace_all(&self, items: impl IntoIterator<Item = MenuItem>) {
        let items: Vec<MenuItem> = items.into_iter().collect();
        *self.write() = items;
    }

    /// Search the catalog by phrase and optional category.
    ///
    /// An item matches when `query` is a case-insensitive substring of its
    /// title or description; a blank query matches everything. When
    /// `category` is non-empty the results are further restricted to items
    /// whose category equals it exactly (case-sensitive). Results keep
    /// catalog insertion order.
    #[must_use]
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<MenuItem> {
        let query = query.trim().to_lowercase();
        let category = category.filter(|c| !c.is_empty());

        self.read()
            .iter()
            .filter(|item| {
                query.is_empty()
                    || item.title.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
            })
            .filter(|item| category.is_none_or(|c| item.category == c))
            .cloned()
            .collect()
    }

    /// Distinct category labels present in the catalog, sorted.
    ///
    /// Used to populate the category filter chips.
    #[must_use]
    pub fn categories(&self) -> BTreeSet<String> {
        self.read()
            .iter()
            .map(|item| item.category.clone())
            .collect()
    }

    /// Look up a single item by ID.
    #[must_use]
    pub fn get(&self, id: MenuItemId) -> Option<MenuItem> {
        self.read().iter().find(|item| item.id == id).cloned()
    }

    /// All items in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<MenuItem> {
        self.read().clone()
    }

    /// Number of items currently in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the catalog is empty (feed not yet fetched, or empty feed).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
