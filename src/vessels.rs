//! Sea Vehicles

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors related to sea vehicles.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VesselError {
    /// The vessel kind label is not one of the known kinds.
    #[error("Unknown vessel kind: {0}")]
    UnknownKind(String),
}

/// The kind of a sea vehicle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VesselKind {
    /// Motorboat
    Motorboat,

    /// Sailboat
    Sailboat,

    /// Cruise ship
    Cruise,
}

impl VesselKind {
    /// All vessel kinds.
    pub const ALL: [VesselKind; 3] = [
        VesselKind::Motorboat,
        VesselKind::Sailboat,
        VesselKind::Cruise,
    ];

    /// Returns the type label of the kind.
    pub const fn label(self) -> &'static str {
        match self {
            VesselKind::Motorboat => "motorboat",
            VesselKind::Sailboat => "sailboat",
            VesselKind::Cruise => "cruise",
        }
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VesselKind {
    type Err = VesselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();

        VesselKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| VesselError::UnknownKind(s.to_string()))
    }
}

/// A named sea vehicle built from a blueprint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeaVehicle {
    name: String,
    blueprint: String,
    kind: VesselKind,
}

impl SeaVehicle {
    /// Creates a new sea vehicle of the given kind.
    pub fn new(name: impl Into<String>, blueprint: impl Into<String>, kind: VesselKind) -> Self {
        Self {
            name: name.into(),
            blueprint: blueprint.into(),
            kind,
        }
    }

    /// Creates a new motorboat.
    pub fn motorboat(name: impl Into<String>, blueprint: impl Into<String>) -> Self {
        Self::new(name, blueprint, VesselKind::Motorboat)
    }

    /// Creates a new sailboat.
    pub fn sailboat(name: impl Into<String>, blueprint: impl Into<String>) -> Self {
        Self::new(name, blueprint, VesselKind::Sailboat)
    }

    /// Creates a new cruise ship.
    pub fn cruise(name: impl Into<String>, blueprint: impl Into<String>) -> Self {
        Self::new(name, blueprint, VesselKind::Cruise)
    }

    /// Returns the name of the vehicle
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the name of the vehicle
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the blueprint of the vehicle
    pub fn blueprint(&self) -> &str {
        &self.blueprint
    }

    /// Sets the blueprint of the vehicle
    pub fn set_blueprint(&mut self, blueprint: impl Into<String>) {
        self.blueprint = blueprint.into();
    }

    /// Returns the kind of the vehicle
    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    /// Returns the type label of the vehicle
    pub fn type_label(&self) -> &'static str {
        self.kind.label()
    }
}
