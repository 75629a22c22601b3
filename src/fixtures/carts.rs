//! Cart Fixtures

use serde::Deserialize;

use crate::cart::Cart;

/// Wrapper for a scripted cart session in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Operations applied to an empty cart, in order
    #[serde(default)]
    pub operations: Vec<CartOperation>,
}

/// A single cart operation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartOperation {
    /// Add a quantity of a product
    Add {
        /// Product code
        code: String,

        /// Quantity to add
        quantity: i64,
    },

    /// Remove a product by code
    Remove {
        /// Product code
        code: String,
    },
}

impl CartOperation {
    /// Apply the operation to `cart`.
    pub fn apply(&self, cart: &mut Cart) {
        match self {
            CartOperation::Add { code, quantity } => cart.add_product(code.as_str(), *quantity),
            CartOperation::Remove { code } => cart.remove_product(code),
        }
    }
}

impl CartFixture {
    /// Replay the operations against a new, empty cart.
    pub fn replay(&self) -> Cart {
        let mut cart = Cart::new();

        for operation in &self.operations {
            operation.apply(&mut cart);
        }

        cart
    }
}
