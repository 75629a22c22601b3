//! Cart CLI

use std::{io, process::ExitCode};

use cart::{
    fixtures::Fixture,
    utils::{CartArgs, CartCommand, write_fleet},
};
use clap::Parser;

#[expect(clippy::print_stderr, reason = "CLI error reporting")]
fn main() -> ExitCode {
    let args = CartArgs::parse();

    if let Err(error) = args.logging.init() {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CartArgs) -> Result<(), String> {
    let fixture = Fixture::with_base_path(args.fixtures);

    tracing::info!(base_path = %fixture.base_path().display(), "using fixtures");

    match args.command {
        CartCommand::Cart { fixture: name } => {
            let cart = fixture
                .cart(&name)
                .map_err(|error| format!("failed to load cart fixture {name}: {error}"))?;

            cart.display()
                .map_err(|error| format!("failed to display cart: {error}"))
        }
        CartCommand::Fleet { fixture: name } => {
            let fleet = fixture
                .load_fleet(&name)
                .map_err(|error| format!("failed to load fleet fixture {name}: {error}"))?;

            write_fleet(io::stdout().lock(), &fleet)
                .map_err(|error| format!("failed to display fleet: {error}"))
        }
    }
}
