use bundle_size_report::cmd::{self, ReportOptions};
use bundle_size_report::config::ReportConfig;
use bundle_size_report::error::ErrorFormatter;
use bundle_size_report::github::workflow;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process;

/// Bundle size reporter for pull requests
///
/// Measures the files of a build output directory, compares them with a
/// baseline build, and keeps one size report comment up to date on the pull
/// request. Every flag can also be set through the matching `INPUT_*`
/// variable, so the binary runs unchanged as a GitHub Action.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan build output and publish the size report comment
    Report {
        /// Token for the comment API
        #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
        token: Option<String>,

        /// Build output to measure (file or directory)
        #[arg(long, env = "INPUT_PATH")]
        path: Option<String>,

        /// Baseline build output to compare against
        #[arg(long, env = "INPUT_DIFF_PATH")]
        diff_path: Option<String>,

        /// Glob patterns selecting reported files; `!` excludes (repeatable, comma separated)
        #[arg(long, env = "INPUT_FILE_GLOB_PATTERN")]
        file_glob_pattern: Vec<String>,

        /// Update the earlier report comment instead of posting a new one [default: true]
        #[arg(long, env = "INPUT_UPDATE_COMMENT", value_name = "BOOL")]
        update_comment: Option<String>,

        /// Print the comment body instead of posting it
        #[arg(short, long)]
        dry_run: bool,

        /// Output as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Report {
            token,
            path,
            diff_path,
            file_glob_pattern,
            update_comment,
            dry_run,
            json,
        }) => ReportConfig::new(path.as_deref().unwrap_or_default())
            .and_then(|config| {
                config
                    .with_token(token.as_deref())
                    .with_diff_path(diff_path.as_deref())
                    .with_patterns(file_glob_pattern)
                    .with_update_comment_input(update_comment.as_deref())
            })
            .map_err(anyhow::Error::from)
            .and_then(|config| {
                cmd::cmd_report(
                    &config,
                    ReportOptions {
                        dry_run: *dry_run,
                        json: *json,
                    },
                )
            }),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("bundle-size-report v{}", env!("CARGO_PKG_VERSION"));
            println!("Bundle size reporter for pull requests\n");
            println!("Usage: bundle-size-report <COMMAND>\n");
            println!("Commands:");
            println!("  report       Scan build output and publish the size report comment");
            println!("  completions  Generate shell completions");
            println!(
                "\nRun 'bundle-size-report <COMMAND> --help' for more information on a command."
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", ErrorFormatter::format(&e));
        if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
            workflow::error(&format!("{:#}", e));
        }
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
