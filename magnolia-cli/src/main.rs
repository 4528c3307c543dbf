//! Main entry point for the magnolia CLI.
//!
//! This is the command-line interface for the Magnolia Air booking desk.
//! Without a command it runs the interactive menu; the one-shot commands
//! cover the same operations:
//! - `flights` / `passengers`: List flights and bookings
//! - `book`: Book a ticket
//! - `details`, `check-in`, `add-luggage`: Post-booking operations
//! - `init`: Create the workbook and import flights

use clap::Parser;
use magnolia_cli::cli::{Cli, Command};
use magnolia_cli::commands::MenuCommand;
use magnolia_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    magnolia::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command.unwrap_or(Command::Menu(MenuCommand::default())) {
        Command::Menu(cmd) => cmd.execute(&global),
        Command::Init(cmd) => cmd.execute(&global),
        Command::Flights(cmd) => cmd.execute(&global),
        Command::Passengers(cmd) => cmd.execute(&global),
        Command::Book(cmd) => cmd.execute(&global),
        Command::Details(cmd) => cmd.execute(&global),
        Command::CheckIn(cmd) => cmd.execute(&global),
        Command::AddLuggage(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
