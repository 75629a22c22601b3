//! Fleet Fixtures

use serde::Deserialize;

use crate::{fixtures::FixtureError, vessels::SeaVehicle};

/// Wrapper for a fleet of vessels in YAML
#[derive(Debug, Deserialize)]
pub struct FleetFixture {
    /// Vessels in the fleet, in listed order
    pub vessels: Vec<VesselFixture>,
}

/// Vessel Fixture
#[derive(Debug, Deserialize)]
pub struct VesselFixture {
    /// Vessel name
    pub name: String,

    /// Vessel blueprint
    pub blueprint: String,

    /// Vessel kind label (e.g., "sailboat")
    pub kind: String,
}

impl TryFrom<VesselFixture> for SeaVehicle {
    type Error = FixtureError;

    fn try_from(fixture: VesselFixture) -> Result<Self, Self::Error> {
        let kind = fixture.kind.parse()?;

        Ok(SeaVehicle::new(fixture.name, fixture.blueprint, kind))
    }
}
