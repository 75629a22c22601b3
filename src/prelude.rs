//! Cart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, EMPTY_CART_MESSAGE},
    fixtures::{
        Fixture, FixtureError,
        carts::{CartFixture, CartOperation},
    },
    vessels::{SeaVehicle, VesselError, VesselKind},
};
