//! Application state shared across the UI layer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use little_lemon_core::Price;

use crate::cart::CartLedger;
use crate::catalog::MenuCatalog;
use crate::config::AppConfig;
use crate::prefs::PreferenceStore;
use crate::session::SessionGate;

/// Application state shared across all screens.
///
/// Cheaply cloneable via `Arc`. The cart and session are session-scoped
/// values owned here and reached through guards, not process-globals;
/// a fresh `AppState` starts a fresh session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    catalog: MenuCatalog,
    cart: Mutex<CartLedger>,
    session: Mutex<SessionGate>,
}

impl AppState {
    /// Create application state with an injected preference store.
    #[must_use]
    pub fn new(config: AppConfig, store: Box<dyn PreferenceStore + Send>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: MenuCatalog::new(),
                cart: Mutex::new(CartLedger::new()),
                session: Mutex::new(SessionGate::new(store)),
            }),
        }
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a handle to the menu catalog.
    #[must_use]
    pub fn catalog(&self) -> &MenuCatalog {
        &self.inner.catalog
    }

    // Cart and session mutations are single-assignment updates; a poisoned
    // mutex still guards a consistent value and can be recovered.
    /// Lock the cart ledger.
    #[must_use]
    pub fn cart(&self) -> MutexGuard<'_, CartLedger> {
        self.inner.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the session gate.
    #[must_use]
    pub fn session(&self) -> MutexGuard<'_, SessionGate> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The checkout total: cart subtotal plus the configured flat fees.
    #[must_use]
    pub fn checkout_total(&self) -> Price {
        self.cart()
            .order_total(self.inner.config.delivery_fee, self.inner.config.service_fee)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;
    use little_lemon_core::{MenuItem, MenuItemId};

    fn state() -> AppState {
        AppState::new(AppConfig::default(), Box::new(MemoryStore::new()))
    }

    fn item(price: &str) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(1),
            title: "Greek Salad".to_string(),
            description: String::new(),
            price: price.to_string(),
            image: String::new(),
            category: "starters".to_string(),
        }
    }

    #[test]
    fn test_checkout_total_uses_configured_fees() {
        let state = state();
        state.cart().add_line(item("$10"), [], 2).unwrap();
        // 20.00 + 2.00 delivery + 1.00 service
        assert_eq!(state.checkout_total(), Price::parse_lenient("23.00"));
    }

    #[test]
    fn test_clones_share_state() {
        let state = state();
        let clone = state.clone();
        state.cart().add_line(item("10"), [], 1).unwrap();
        assert_eq!(clone.cart().len(), 1);
    }

    #[test]
    fn test_fresh_state_starts_anonymous_and_empty() {
        let state = state();
        assert!(!state.session().is_logged_in());
        assert!(state.cart().is_empty());
        assert!(state.catalog().is_empty());
    }
}
