//! User actions: state transitions that emit navigation intents.
//!
//! Each function mutates state through [`AppState`] and returns the
//! [`NavIntent`] the platform layer should follow next. Failures return the
//! module error and leave navigation where it was.

use little_lemon_core::{MenuItem, MenuItemId, ProductExtra};
use tracing::debug;

use crate::cart::CartError;
use crate::navigation::NavIntent;
use crate::session::{RegistrationError, SessionGate};
use crate::state::AppState;

/// Where a fresh app launch should land: the menu for a restored session,
/// onboarding otherwise.
#[must_use]
pub fn start_destination(state: &AppState) -> NavIntent {
    if state.session().is_logged_in() {
        NavIntent::Home
    } else {
        NavIntent::Onboarding
    }
}

/// Submit the registration form.
///
/// On success the user is logged in and lands on the menu.
///
/// # Errors
///
/// Returns [`RegistrationError::MissingField`] when any field is blank; no
/// state changes in that case.
pub fn register(
    state: &AppState,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<NavIntent, RegistrationError> {
    let profile = SessionGate::validate_registration(first_name, last_name, email)?;
    state.session().log_in(profile);
    Ok(NavIntent::Home)
}

/// Open the detail screen for a catalog item, if it still exists.
///
/// `None` means the item vanished in a feed refresh; the caller stays put.
#[must_use]
pub fn open_product(state: &AppState, id: MenuItemId) -> Option<NavIntent> {
    if state.catalog().get(id).is_some() {
        Some(NavIntent::ProductDetail(id))
    } else {
        debug!(%id, "product no longer in catalog");
        None
    }
}

/// Add a configured item to the cart and continue to checkout.
///
/// # Errors
///
/// Returns [`CartError::InvalidQuantity`] when `quantity` is zero.
pub fn add_to_cart(
    state: &AppState,
    item: MenuItem,
    extras: Vec<ProductExtra>,
    quantity: u32,
) -> Result<NavIntent, CartError> {
    state.cart().add_line(item, extras, quantity)?;
    Ok(NavIntent::Checkout)
}

/// Log out: clears the session, persisted profile data, and the cart, then
/// returns to onboarding with the back stack gone.
pub fn log_out(state: &AppState) -> NavIntent {
    let mut cart = state.cart();
    state.session().log_out(&mut cart);
    NavIntent::Onboarding
}
