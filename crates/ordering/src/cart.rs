//! Cart lines and the session-scoped cart ledger.
//!
//! The ledger is an explicitly-owned value reached through
//! [`crate::state::AppState`], not a process-global: it lives and dies with
//! the user session and is cleared on logout.

use little_lemon_core::{MenuItem, Price, ProductExtra};
use thiserror::Error;

/// Errors raised by cart operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A line was requested with a quantity below one. This is a contract
    /// violation in the calling layer; the ledger rejects it rather than
    /// clamping.
    #[error("quantity must be at least 1 (got {got})")]
    InvalidQuantity {
        /// The rejected quantity.
        got: u32,
    },
}

/// One chosen purchase: a menu item snapshot, selected add-ons, quantity.
///
/// The item is held by value - the catalog can be wholesale-replaced by a
/// feed refresh while this line sits in the cart, and the line must keep
/// pricing what the user actually chose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    item: MenuItem,
    extras: Vec<ProductExtra>,
    quantity: u32,
}

impl CartLine {
    /// Create a line, deduplicating extras and validating the quantity.
    ///
    /// Duplicate extras (same name and price) collapse to the first
    /// occurrence; selection order is preserved for display.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn new(
        item: MenuItem,
        extras: impl IntoIterator<Item = ProductExtra>,
        quantity: u32,
    ) -> Result<Self, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity { got: quantity });
        }

        let mut deduped: Vec<ProductExtra> = Vec::new();
        for extra in extras {
            if !deduped.contains(&extra) {
                deduped.push(extra);
            }
        }

        Ok(Self {
            item,
            extras: deduped,
            quantity,
        })
    }

    /// The purchased menu item snapshot.
    #[must_use]
    pub const fn item(&self) -> &MenuItem {
        &self.item
    }

    /// Selected add-ons in selection order.
    #[must_use]
    pub fn extras(&self) -> &[ProductExtra] {
        &self.extras
    }

    /// How many of this item, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Sum of the add-on prices for a single unit.
    #[must_use]
    pub fn extras_total(&self) -> Price {
        self.extras.iter().map(|extra| extra.price).sum()
    }

    /// `(base price + extras) * quantity`.
    ///
    /// Malformed feed price text contributes a base price of zero; the
    /// line never fails to price.
    #[must_use]
    pub fn line_total(&self) -> Price {
        (self.item.base_price() + self.extras_total()) * self.quantity
    }

    /// Display join of the add-on names, e.g. "Bacon, Parmesan".
    #[must_use]
    pub fn extras_text(&self) -> String {
        self.extras
            .iter()
            .map(|extra| extra.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The active session's cart: an ordered, append-only list of lines.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a line to the end of the cart.
    ///
    /// Repeated adds of an identical item always produce separate lines;
    /// there is no merge key.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
    pub fn add_line(
        &mut self,
        item: MenuItem,
        extras: impl IntoIterator<Item = ProductExtra>,
        quantity: u32,
    ) -> Result<(), CartError> {
        let line = CartLine::new(item, extras, quantity)?;
        self.lines.push(line);
        Ok(())
    }

    /// Empty the cart. Called on logout.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines (not units).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines, for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(CartLine::quantity).sum()
    }

    /// Sum of every line's total.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// `subtotal + delivery fee + service fee`.
    ///
    /// The flat fees come from configuration; the ledger embeds no
    /// business constants.
    #[must_use]
    pub fn order_total(&self, delivery_fee: Price, service_fee: Price) -> Price {
        self.subtotal() + delivery_fee + service_fee
    }
}
