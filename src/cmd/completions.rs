//! Completions command implementation
//!
//! Handles the `bundle-size-report completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::{Arg, ArgAction, Command};
use clap_complete::{generate, Shell};
use std::io::Write;

const BIN_NAME: &str = "bundle-size-report";

/// Build the command tree completions are generated from
///
/// Mirrors the derive-based `Cli` in the binary, which the library cannot see.
pub fn completion_command() -> Command {
    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bundle size reporter for pull requests")
        .subcommand(
            Command::new("report")
                .about("Scan build output and publish the size report comment")
                .arg(Arg::new("token").long("token").num_args(1))
                .arg(Arg::new("path").long("path").num_args(1))
                .arg(Arg::new("diff-path").long("diff-path").num_args(1))
                .arg(
                    Arg::new("file-glob-pattern")
                        .long("file-glob-pattern")
                        .num_args(1)
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("update-comment")
                        .long("update-comment")
                        .num_args(1)
                        .value_parser(["true", "false"]),
                )
                .arg(
                    Arg::new("dry-run")
                        .short('d')
                        .long("dry-run")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(Command::new("completions").about("Generate shell completions"))
}

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-size-report completions bash > /etc/bash_completion.d/bundle-size-report
///
/// # Zsh
/// bundle-size-report completions zsh > ~/.zfunc/_bundle-size-report
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}

/// Write the completion script for `shell` to `out`
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = completion_command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
