//! End-to-end ordering flow: register, browse, fill the cart, check out,
//! log out.

use little_lemon_core::{MenuItemId, Price, ProductExtra};
use little_lemon_integration_tests::{sample_state, state_with_store};
use little_lemon_ordering::extras::extras_for;
use little_lemon_ordering::prefs::{MemoryStore, PreferenceStore};
use little_lemon_ordering::session::keys;
use little_lemon_ordering::{NavIntent, actions};

#[test]
#[allow(clippy::unwrap_used)]
fn full_ordering_flow() {
    let state = sample_state();

    // Fresh install lands on onboarding
    assert_eq!(actions::start_destination(&state), NavIntent::Onboarding);

    // Registration with a blank field is rejected and changes nothing
    assert!(actions::register(&state, "Tilly", "", "tilly@littlelemon.com").is_err());
    assert!(!state.session().is_logged_in());

    // Successful registration lands on the menu
    let intent = actions::register(&state, "Tilly", "Lemon", "tilly@littlelemon.com").unwrap();
    assert_eq!(intent, NavIntent::Home);

    // Browse: phrase search narrows to the dessert
    let results = state.catalog().search("lemon", None);
    assert_eq!(results.len(), 1);
    let dessert = results.into_iter().next().unwrap();
    assert_eq!(dessert.id, MenuItemId::new(2));

    // Open the salad's detail screen and add two with no extras
    let salad = state.catalog().get(MenuItemId::new(1)).unwrap();
    assert_eq!(
        actions::open_product(&state, salad.id),
        Some(NavIntent::ProductDetail(salad.id))
    );
    let intent = actions::add_to_cart(&state, salad, vec![], 2).unwrap();
    assert_eq!(intent, NavIntent::Checkout);

    // Add one dessert with a single 1.00 extra
    let extra = ProductExtra::new("Cheese", Price::parse_lenient("1.00"));
    actions::add_to_cart(&state, dessert, vec![extra], 1).unwrap();

    // Checkout math: 20.00 + 11.00 + 2.00 delivery + 1.00 service
    {
        let cart = state.cart();
        let totals: Vec<Price> = cart.lines().iter().map(|l| l.line_total()).collect();
        assert_eq!(
            totals,
            vec![Price::parse_lenient("20.00"), Price::parse_lenient("11.00")]
        );
        assert_eq!(cart.subtotal(), Price::parse_lenient("31.00"));
    }
    assert_eq!(state.checkout_total(), Price::parse_lenient("34.00"));

    // Logout wipes the session and the cart and returns to onboarding
    let intent = actions::log_out(&state);
    assert_eq!(intent, NavIntent::Onboarding);
    assert!(!state.session().is_logged_in());
    assert!(state.cart().is_empty());
    assert_eq!(state.checkout_total(), Price::parse_lenient("3.00"));
}

#[test]
#[allow(clippy::unwrap_used)]
fn product_detail_extras_price_into_the_cart() {
    let state = sample_state();
    actions::register(&state, "Tilly", "Lemon", "tilly@littlelemon.com").unwrap();

    // The bruschetta detail screen offers its three add-ons
    let bruschetta = state.catalog().get(MenuItemId::new(3)).unwrap();
    let extras = extras_for(&bruschetta.title);
    assert_eq!(extras.len(), 3);

    // All three selected: (7.50 + 3.00) * 2
    actions::add_to_cart(&state, bruschetta, extras, 2).unwrap();
    let cart = state.cart();
    let line = cart.lines().first().unwrap();
    assert_eq!(line.line_total(), Price::parse_lenient("21.00"));
    assert_eq!(line.extras_text(), "Eta, Parmesan, Dressing");
}

#[test]
#[allow(clippy::unwrap_used)]
fn session_restores_from_a_previous_run() {
    // What the device store contains after a registration in a prior run
    let mut store = MemoryStore::new();
    store.put_bool(keys::IS_LOGGED_IN, true);
    store.put_string(keys::FIRST_NAME, "Tilly");
    store.put_string(keys::LAST_NAME, "Lemon");
    store.put_string(keys::EMAIL, "tilly@littlelemon.com");

    // The next launch restores the session and starts on the menu
    let state = state_with_store(store);
    assert_eq!(actions::start_destination(&state), NavIntent::Home);
    let session = state.session();
    assert_eq!(session.profile().unwrap().email(), "tilly@littlelemon.com");
}
