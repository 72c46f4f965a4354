//! Navigation intents emitted by state transitions.
//!
//! The core never holds a reference to navigation state. User actions
//! return a fire-once [`NavIntent`] and the platform layer drives its
//! navigation controller from it.

use little_lemon_core::MenuItemId;

/// A fire-once navigation trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Show onboarding/registration. Start destination for anonymous users
    /// and the landing point after logout.
    Onboarding,
    /// Show the menu browser. Start destination for logged-in users and the
    /// landing point after a successful registration.
    Home,
    /// Show the detail screen for one menu item.
    ProductDetail(MenuItemId),
    /// Show the checkout summary. Emitted after add-to-cart.
    Checkout,
    /// Show the profile screen.
    Profile,
    /// Pop back to the previous screen.
    Back,
}
