//! Static add-on lookup for the product detail screen.

use little_lemon_core::{Price, ProductExtra};
use rust_decimal::Decimal;

const EXTRA_PRICE: Price = Price::new(Decimal::ONE);

/// Add-ons offered for a menu item, keyed by title (case-insensitive).
///
/// The table is static: the feed carries no add-on data, so every product
/// type maps to a fixed list and unknown titles get the generic pair.
#[must_use]
pub fn extras_for(title: &str) -> Vec<ProductExtra> {
    match title.to_lowercase().as_str() {
        "bruschetta" => vec![
            ProductExtra::new("Eta", EXTRA_PRICE),
            ProductExtra::new("Parmesan", EXTRA_PRICE),
            ProductExtra::new("Dressing", EXTRA_PRICE),
        ],
        "pasta" => vec![
            ProductExtra::new("Bacon", EXTRA_PRICE),
            ProductExtra::new("Parmesan", EXTRA_PRICE),
        ],
        _ => vec![
            ProductExtra::new("Extra sauce", EXTRA_PRICE),
            ProductExtra::new("Cheese", EXTRA_PRICE),
        ],
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let names: Vec<String> = extras_for("BRUSCHETTA")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Eta", "Parmesan", "Dressing"]);
        assert_eq!(extras_for("Pasta").len(), 2);
    }

    #[test]
    fn test_unknown_title_gets_generic_pair() {
        let names: Vec<String> = extras_for("Greek Salad")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Extra sauce", "Cheese"]);
    }

    #[test]
    fn test_all_extras_cost_one() {
        for extra in extras_for("bruschetta")
            .into_iter()
            .chain(extras_for("pasta"))
            .chain(extras_for("anything"))
        {
            assert_eq!(extra.price, Price::parse_lenient("1.00"));
        }
    }
}
