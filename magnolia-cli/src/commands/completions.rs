//! The `completions` command.

use crate::cli::Cli;
use crate::error::CliError;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Name of the installed binary.
const BIN_NAME: &str = "magnolia";

/// Print a shell completion script for the booking desk
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Writes the script to stdout and installation hints to stderr.
    pub fn execute(&self) -> Result<(), CliError> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "# {} completion script for {BIN_NAME}", self.shell)?;
        if let Some(hint) = install_hint(self.shell) {
            writeln!(stderr, "# To enable it:")?;
            for line in hint.lines() {
                writeln!(stderr, "#   {line}")?;
            }
        }

        write_script(self.shell, &mut io::stdout().lock());
        Ok(())
    }
}

/// Generates the completion script for `shell` into `out`.
fn write_script(shell: Shell, out: &mut dyn Write) {
    generate(shell, &mut Cli::command(), BIN_NAME, out);
}

/// How to install the script for shells with a conventional location.
fn install_hint(shell: Shell) -> Option<String> {
    let hint = match shell {
        Shell::Bash => format!(
            "{BIN_NAME} completions bash > ~/.local/share/bash-completion/completions/{BIN_NAME}\n\
             or add eval \"$({BIN_NAME} completions bash)\" to ~/.bashrc"
        ),
        Shell::Zsh => format!(
            "{BIN_NAME} completions zsh > ~/.zsh/completions/_{BIN_NAME}\n\
             with ~/.zsh/completions on your $fpath"
        ),
        Shell::Fish => {
            format!("{BIN_NAME} completions fish > ~/.config/fish/completions/{BIN_NAME}.fish")
        }
        Shell::PowerShell => {
            format!("{BIN_NAME} completions powershell | Out-String | Invoke-Expression")
        }
        _ => return None,
    };
    Some(hint)
}
