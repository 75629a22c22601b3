//! Cart

use std::{collections::BTreeMap, io};

use thiserror::Error;
use tracing::debug;

/// Message rendered for a cart with no entries.
pub const EMPTY_CART_MESSAGE: &str = "Your shopping cart is empty";

/// Errors related to rendering a cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// Writing the rendered cart failed.
    #[error("Failed to write cart: {0}")]
    Io(#[from] io::Error),
}

/// Cart
///
/// Tracks a quantity per product code, iterated in ascending code order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: BTreeMap<String, i64>,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart {
            entries: BTreeMap::new(),
        }
    }

    /// Add `quantity` of the product `code` to the cart.
    ///
    /// A new code is inserted with `quantity`. For a code already in the cart the
    /// quantity is added to the stored value, saturating at the `i64` bounds.
    /// Saturating rather than wrapping is deliberate: an overflowing sum pins to
    /// the bound instead of flipping sign. Zero and negative quantities are
    /// stored as given.
    pub fn add_product(&mut self, code: impl Into<String>, quantity: i64) {
        let code = code.into();

        let total = self
            .entries
            .get(&code)
            .map_or(quantity, |current| current.saturating_add(quantity));

        debug!(code = %code, quantity, total, "added product to cart");

        self.entries.insert(code, total);
    }

    /// Remove the product `code` from the cart.
    ///
    /// Removing a code that isn't in the cart does nothing.
    pub fn remove_product(&mut self, code: &str) {
        if let Some(quantity) = self.entries.remove(code) {
            debug!(code, quantity, "removed product from cart");
        }
    }

    /// Write the cart to standard output.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if standard output could not be written.
    pub fn display(&self) -> Result<(), CartError> {
        let stdout = io::stdout();
        let handle = stdout.lock();

        self.write_to(handle)
    }

    /// Render the cart to `out`, one `<code> (<quantity>)` line per entry.
    ///
    /// An empty cart renders [`EMPTY_CART_MESSAGE`] on a line of its own.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the writer fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), CartError> {
        if self.is_empty() {
            writeln!(out, "{EMPTY_CART_MESSAGE}")?;
        } else {
            for (code, quantity) in &self.entries {
                writeln!(out, "{code} ({quantity})")?;
            }
        }

        out.flush()?;

        Ok(())
    }

    /// Get the entries of the cart, ordered by product code.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, i64> {
        &self.entries
    }

    /// Get the quantity held for `code`, if it is in the cart.
    #[must_use]
    pub fn quantity(&self, code: &str) -> Option<i64> {
        self.entries.get(code).copied()
    }

    /// Iterate over `(code, quantity)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries
            .iter()
            .map(|(code, quantity)| (code.as_str(), *quantity))
    }

    /// Get the number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> Extend<(K, i64)> for Cart {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (code, quantity) in iter {
            self.add_product(code, quantity);
        }
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Cart {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut cart = Cart::new();
        cart.extend(iter);
        cart
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn rendered(cart: &Cart) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        cart.write_to(&mut out)?;

        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn add_new_product_inserts_entry() {
        let mut cart = Cart::new();

        cart.add_product("Water", 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("Water"), Some(3));
    }

    #[test]
    fn add_existing_product_increases_quantity() {
        let mut cart = Cart::new();

        cart.add_product("Water", 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("Water"), Some(3));

        cart.add_product("Water", 7);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("Water"), Some(10));
    }

    #[test]
    fn add_multiple_products_keeps_each_quantity() {
        let mut cart = Cart::new();

        cart.add_product("Water", 3);
        cart.add_product("Snack", 5);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity("Water"), Some(3));
        assert_eq!(cart.quantity("Snack"), Some(5));
    }

    #[test]
    fn add_accepts_zero_and_negative_quantities() {
        let mut cart = Cart::new();

        cart.add_product("Water", 0);
        cart.add_product("Snack", -4);
        cart.add_product("Snack", 1);

        assert_eq!(cart.quantity("Water"), Some(0));
        assert_eq!(cart.quantity("Snack"), Some(-3));
    }

    #[test]
    fn add_saturates_on_overflow() {
        let mut cart = Cart::new();

        cart.add_product("Water", i64::MAX);
        cart.add_product("Water", 1);

        assert_eq!(cart.quantity("Water"), Some(i64::MAX));
    }

    #[test]
    fn add_after_remove_starts_from_scratch() {
        let mut cart = Cart::new();

        cart.add_product("Water", 3);
        cart.remove_product("Water");
        cart.add_product("Water", 2);

        assert_eq!(cart.quantity("Water"), Some(2));
    }

    #[test]
    fn remove_from_empty_cart_does_nothing() {
        let mut cart = Cart::new();

        cart.remove_product("Water");

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_unknown_product_does_nothing() {
        let mut cart = Cart::new();
        cart.add_product("Water", 3);

        cart.remove_product("Not Water");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("Water"), Some(3));
    }

    #[test]
    fn remove_existing_product_deletes_entry() {
        let mut cart = Cart::new();
        cart.add_product("Water", 3);

        cart.remove_product("Water");

        assert_eq!(cart.len(), 0);
        assert_eq!(cart.quantity("Water"), None);
        assert!(!cart.entries().contains_key("Water"));
    }

    #[test]
    fn write_to_empty_cart_renders_message() -> TestResult {
        let cart = Cart::new();

        assert_eq!(rendered(&cart)?, "Your shopping cart is empty\n");

        Ok(())
    }

    #[test]
    fn write_to_renders_entries_in_code_order() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product("B Product", 5);
        cart.add_product("A Product", 3);

        assert_eq!(rendered(&cart)?, "A Product (3)\nB Product (5)\n");

        Ok(())
    }

    #[test]
    fn write_to_is_repeatable() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product("Water", 3);

        let first = rendered(&cart)?;
        let second = rendered(&cart)?;

        assert_eq!(first, second);
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn iter_returns_entries_in_code_order() {
        let cart: Cart = [("Snack", 5), ("Water", 3), ("Apple", 1)]
            .into_iter()
            .collect();

        let codes: Vec<&str> = cart.iter().map(|(code, _)| code).collect();

        assert_eq!(codes, vec!["Apple", "Snack", "Water"]);
    }

    #[test]
    fn from_iter_sums_repeated_codes() {
        let cart: Cart = [("Water", 3), ("Water", 7)].into_iter().collect();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity("Water"), Some(10));
    }
}
