//! Newtype ID for type-safe menu item references.

use serde::{Deserialize, Serialize};

/// Identifier of a menu item, as assigned by the menu feed.
///
/// A newtype over `i32` so item IDs cannot be confused with quantities or
/// other integers flowing through cart and catalog code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(i32);

impl MenuItemId {
    /// Create a new ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for MenuItemId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<MenuItemId> for i32 {
    fn from(id: MenuItemId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let id = MenuItemId::new(7);
        assert_eq!(id.as_i32(), 7);
        assert_eq!(i32::from(id), 7);
        assert_eq!(MenuItemId::from(7), id);
    }

    #[test]
    fn test_display() {
        assert_eq!(MenuItemId::new(42).to_string(), "42");
    }

    #[test]
    fn test_serde_transparent() {
        let id = MenuItemId::new(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");

        let parsed: MenuItemId = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, id);
    }
}
