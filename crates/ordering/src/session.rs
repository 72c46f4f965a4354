//! Session gate: the authenticated/anonymous state and its transition rules.
//!
//! Two states, two transitions. Anonymous becomes Authenticated only through
//! a successful registration ([`SessionGate::validate_registration`] then
//! [`SessionGate::log_in`]); Authenticated becomes Anonymous only through
//! [`SessionGate::log_out`], which also wipes persisted profile data and the
//! cart. There is no session expiry and no token refresh.

use thiserror::Error;
use tracing::{debug, info};

use crate::cart::CartLedger;
use crate::prefs::PreferenceStore;

/// Keys used in the preference store.
pub mod keys {
    /// Whether a registered user is logged in.
    pub const IS_LOGGED_IN: &str = "isLoggedIn";

    /// Registered first name.
    pub const FIRST_NAME: &str = "firstName";

    /// Registered last name.
    pub const LAST_NAME: &str = "lastName";

    /// Registered email address.
    pub const EMAIL: &str = "email";

    /// Email notifications: order statuses.
    pub const ORDER_STATUS_NOTIFICATIONS: &str = "orderStatusNotifications";

    /// Email notifications: password changes.
    pub const PASSWORD_CHANGE_NOTIFICATIONS: &str = "passwordChangeNotifications";

    /// Email notifications: special offers.
    pub const SPECIAL_OFFERS_NOTIFICATIONS: &str = "specialOffersNotifications";
}

/// Errors raised by registration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// One or more of first name, last name, and email is blank.
    #[error("missing required field")]
    MissingField,
}

/// A registered user's profile.
///
/// Only obtainable from [`SessionGate::validate_registration`] or from a
/// previously persisted session, so holding one implies the registration
/// rule passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    first_name: String,
    last_name: String,
    email: String,
}

impl Profile {
    fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    /// The registered first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The registered last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// The registered email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Per-user email notification switches. All on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    /// Order status updates.
    pub order_statuses: bool,
    /// Password change alerts.
    pub password_changes: bool,
    /// Special offers.
    pub special_offers: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            order_statuses: true,
            password_changes: true,
            special_offers: true,
        }
    }
}

/// Holder of the authenticated flag and owner of its transition rules.
///
/// Persists through an injected [`PreferenceStore`] so a login survives app
/// restarts; the transition logic itself never touches storage concerns
/// beyond the port.
pub struct SessionGate {
    store: Box<dyn PreferenceStore + Send>,
    logged_in: bool,
    profile: Option<Profile>,
    notifications: NotificationPrefs,
}

impl SessionGate {
    /// Create a gate, restoring any persisted session from `store`.
    ///
    /// A persisted logged-in flag without a complete profile is treated as
    /// logged out: the flag must never be true while the profile fields
    /// are blank.
    pub fn new(store: Box<dyn PreferenceStore + Send>) -> Self {
        let profile = load_profile(store.as_ref());
        let flag = store.get_bool(keys::IS_LOGGED_IN).unwrap_or(false);
        let logged_in = flag && profile.is_some();
        if flag && !logged_in {
            debug!("discarding persisted login flag without a profile");
        }

        let notifications = NotificationPrefs {
            order_statuses: store
                .get_bool(keys::ORDER_STATUS_NOTIFICATIONS)
                .unwrap_or(true),
            password_changes: store
                .get_bool(keys::PASSWORD_CHANGE_NOTIFICATIONS)
                .unwrap_or(true),
            special_offers: store
                .get_bool(keys::SPECIAL_OFFERS_NOTIFICATIONS)
                .unwrap_or(true),
        };

        Self {
            store,
            logged_in,
            profile: if logged_in { profile } else { None },
            notifications,
        }
    }

    /// Validate a registration attempt.
    ///
    /// Accepted only when all three fields are non-blank after trimming.
    /// This is the sole rule guarding the anonymous-to-authenticated
    /// transition; no state changes on rejection.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::MissingField`] when any field is empty
    /// or whitespace-only.
    pub fn validate_registration(
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<Profile, RegistrationError> {
        if first_name.trim().is_empty() || last_name.trim().is_empty() || email.trim().is_empty() {
            return Err(RegistrationError::MissingField);
        }
        Ok(Profile::new(first_name, last_name, email))
    }

    /// Record a successful registration: set the flag and persist the
    /// profile.
    pub fn log_in(&mut self, profile: Profile) {
        self.store.put_bool(keys::IS_LOGGED_IN, true);
        self.store.put_string(keys::FIRST_NAME, &profile.first_name);
        self.store.put_string(keys::LAST_NAME, &profile.last_name);
        self.store.put_string(keys::EMAIL, &profile.email);

        info!(email = %profile.email, "user logged in");
        self.logged_in = true;
        self.profile = Some(profile);
    }

    /// Log out: clear the flag, all persisted fields, and the cart.
    ///
    /// Logout and cart-clearing are coupled invariants - cart contents
    /// never survive a logout boundary.
    pub fn log_out(&mut self, cart: &mut CartLedger) {
        self.store.clear_all();
        self.logged_in = false;
        self.profile = None;
        self.notifications = NotificationPrefs::default();
        cart.clear();
        info!("user logged out");
    }

    /// Whether a registered user is logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// The logged-in user's profile, if any.
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Current notification switches.
    #[must_use]
    pub const fn notifications(&self) -> NotificationPrefs {
        self.notifications
    }

    /// Toggle order status notifications, persisting the change.
    pub fn set_order_statuses(&mut self, enabled: bool) {
        self.notifications.order_statuses = enabled;
        self.store.put_bool(keys::ORDER_STATUS_NOTIFICATIONS, enabled);
    }

    /// Toggle password change notifications, persisting the change.
    pub fn set_password_changes(&mut self, enabled: bool) {
        self.notifications.password_changes = enabled;
        self.store
            .put_bool(keys::PASSWORD_CHANGE_NOTIFICATIONS, enabled);
    }

    /// Toggle special offer notifications, persisting the change.
    pub fn set_special_offers(&mut self, enabled: bool) {
        self.notifications.special_offers = enabled;
        self.store
            .put_bool(keys::SPECIAL_OFFERS_NOTIFICATIONS, enabled);
    }
}

/// Read a complete profile from the store, `None` when any field is blank.
fn load_profile(store: &dyn PreferenceStore) -> Option<Profile> {
    let first_name = store.get_string(keys::FIRST_NAME)?;
    let last_name = store.get_string(keys::LAST_NAME)?;
    let email = store.get_string(keys::EMAIL)?;

    if first_name.trim().is_empty() || last_name.trim().is_empty() || email.trim().is_empty() {
        return None;
    }
    Some(Profile::new(&first_name, &last_name, &email))
}
