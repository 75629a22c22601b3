//! Cart
//!
//! A shopping cart that tracks quantities per product code, alongside a small
//! catalogue of sea vehicle kinds. YAML fixtures drive both from the `cart` binary.

pub mod cart;
pub mod fixtures;
pub mod prelude;
pub mod utils;
pub mod vessels;
