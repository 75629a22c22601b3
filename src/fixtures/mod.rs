//! Fixtures

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::{
    cart::Cart,
    fixtures::{carts::CartFixture, fleets::FleetFixture},
    vessels::{SeaVehicle, VesselError},
};

pub mod carts;
pub mod fleets;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid vessel data
    #[error("Invalid vessel: {0}")]
    Vessel(#[from] VesselError),
}

/// Fixture loader rooted at a base directory.
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// The directory fixtures are read from
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load a cart script from `carts/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&self, name: &str) -> Result<CartFixture, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        debug!(
            path = %file_path.display(),
            operations = fixture.operations.len(),
            "loaded cart fixture"
        );

        Ok(fixture)
    }

    /// Load a cart script and replay it into a cart
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn cart(&self, name: &str) -> Result<Cart, FixtureError> {
        Ok(self.load_cart(name)?.replay())
    }

    /// Load a fleet from `fleets/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or lists an unknown vessel kind.
    pub fn load_fleet(&self, name: &str) -> Result<Vec<SeaVehicle>, FixtureError> {
        let file_path = self.base_path.join("fleets").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: FleetFixture = serde_norway::from_str(&contents)?;

        let fleet = fixture
            .vessels
            .into_iter()
            .map(SeaVehicle::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            path = %file_path.display(),
            vessels = fleet.len(),
            "loaded fleet fixture"
        );

        Ok(fleet)
    }
}
