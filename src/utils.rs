//! Utils

use std::{io, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError, util::TryInitError};

use crate::vessels::SeaVehicle;

/// Arguments for the `cart` binary
#[derive(Debug, Parser)]
#[command(name = "cart", about = "Replay cart and fleet fixtures", long_about = None)]
pub struct CartArgs {
    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// Directory containing the `carts/` and `fleets/` fixture sets
    #[arg(long, env = "CART_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures: PathBuf,

    /// Command to run
    #[command(subcommand)]
    pub command: CartCommand,
}

/// Subcommands of the `cart` binary
#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Replay a cart fixture and display the resulting cart
    Cart {
        /// Cart fixture name, read from `carts/<name>.yml`
        fixture: String,
    },

    /// List the vessels of a fleet fixture with their type labels
    Fleet {
        /// Fleet fixture name, read from `fleets/<name>.yml`
        fixture: String,
    },
}

/// Errors raised while installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log level is not a valid filter directive.
    #[error("Invalid log level: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("Failed to install log subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl LoggingArgs {
    /// Build the filter for the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a valid filter directive.
    pub fn filter(&self) -> Result<EnvFilter, ParseError> {
        EnvFilter::try_new(&self.log_level)
    }

    /// Install a stderr `tracing` subscriber filtered at the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is malformed or a global subscriber is
    /// already installed.
    pub fn init(&self) -> Result<(), LoggingError> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let filter = self.filter()?;

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .with(filter)
            .try_init()?;

        Ok(())
    }
}

/// Write one `<name> (<label>)` line per vessel.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_fleet(mut out: impl io::Write, fleet: &[SeaVehicle]) -> io::Result<()> {
    for vessel in fleet {
        writeln!(out, "{} ({})", vessel.name(), vessel.type_label())?;
    }

    out.flush()
}
