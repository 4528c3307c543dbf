//! Build script for magnolia-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("magnolia")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book, check in and manage Magnolia Air passengers")
        .long_about(
            "Terminal booking desk for Magnolia Air. Without a command, runs the interactive menu; \
             type 'main' at any prompt to return to it.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("MAGNOLIA_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("MAGNOLIA_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic workbook initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("MAGNOLIA_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("menu")
                .about("Run the interactive booking desk menu")
                .long_about("Show the numbered menu and run operations until Exit is chosen"),
            Command::new("init")
                .about("Initialize the data directory and workbook")
                .long_about("Create the workbook, optionally importing flights from a CSV file"),
            Command::new("flights")
                .about("List scheduled flights")
                .long_about("List every flight as a table, JSON or CSV"),
            Command::new("passengers")
                .about("List the passengers booked on a flight")
                .long_about("List every booking on one flight as a table, JSON or CSV"),
            Command::new("book")
                .about("Book a ticket")
                .long_about("Choose a destination and flight, enter passenger details, and issue a booking number"),
            Command::new("details")
                .about("View or update a passenger's details")
                .long_about("Find a booking by booking number and last name, show it, and correct its details"),
            Command::new("check-in")
                .about("Check a passenger in")
                .long_about("Check a booking in; checked-in bookings can no longer be changed"),
            Command::new("add-luggage")
                .about("Add checked bags to a booking")
                .long_about("Raise the checked bag count of a booking, up to two bags"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = std::env::var_os("OUT_DIR").map(PathBuf::from).ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut page = Vec::new();
    Man::new(build_cli()).render(&mut page)?;
    fs::write(man_dir.join("magnolia.1"), page)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
