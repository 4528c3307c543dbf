//! Library exports for magnolia-cli.
//!
//! The binary in `main.rs` is a thin wrapper over these modules, which keeps
//! the desk operations testable against in-memory consoles.

pub mod cli;
pub mod commands;
pub mod console;
pub mod desk;
pub mod error;
pub mod render;
pub mod utils;

pub use cli::Cli;
