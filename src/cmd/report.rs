//! Report command implementation
//!
//! Handles the `bundle-size-report report` command: scan the build output,
//! compare it against an optional baseline, and publish the table as the
//! pull request's report comment.

use anyhow::{Context, Result};
use console::style;
use log::info;

use crate::config::ReportConfig;
use crate::fmt::{bytes_to_size, delta_string, CHART, CHECKMARK, INFO};
use crate::github::{
    reconcile, workflow, ActionContext, CommentStore, CommentTarget, GitHubClient,
    ReconcileOutcome,
};
use crate::infra::{RealFileSystem, SizeSource};
use crate::output::JsonOutput;
use crate::report::{compare, render_markdown, scan_with_fs, ReportTable, SizeReport};

/// Step output carrying the raw scan of the current build
pub const SIZE_OUTPUT: &str = "size";

/// Flags that change how a run reports, not what it measures
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print the comment body instead of posting it
    pub dry_run: bool,
    /// Print a JSON summary instead of human-readable output
    pub json: bool,
}

/// Scan results and the rendered comment body
#[derive(Debug, Clone)]
pub struct PreparedReport {
    /// Unfiltered scan of the current build
    pub current: SizeReport,
    /// Filtered comparison
    pub table: ReportTable,
    /// Markdown comment body
    pub markdown: String,
}

/// Run the report command against the real environment
///
/// # Examples
///
/// ```no_run
/// use bundle_size_report::cmd::report::{cmd_report, ReportOptions};
/// use bundle_size_report::config::ReportConfig;
///
/// let config = ReportConfig::new("dist")?.with_diff_path(Some("base/dist"));
/// cmd_report(&config, ReportOptions { dry_run: true, json: false })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The current or baseline path cannot be scanned
/// - A glob pattern is invalid
/// - The step output file cannot be written
/// - The run targets a pull request and no token was given
/// - Any comment API call fails
pub fn cmd_report(config: &ReportConfig, options: ReportOptions) -> Result<()> {
    let context = ActionContext::from_env().context("Failed to read the workflow run context")?;

    run_report(config, options, &context, &RealFileSystem, |ctx| {
        let token = config.require_token()?;
        Ok(GitHubClient::new(&ctx.api_url, token)?)
    })?;

    Ok(())
}

/// Run the report command with injected filesystem and comment store
///
/// `connect` is only called when the run targets a pull request and is not a
/// dry run. Returns `None` for a dry run, otherwise the publishing outcome.
pub fn run_report<FS, S, F>(
    config: &ReportConfig,
    options: ReportOptions,
    context: &ActionContext,
    fs: &FS,
    connect: F,
) -> Result<Option<ReconcileOutcome>>
where
    FS: SizeSource,
    S: CommentStore,
    F: FnOnce(&ActionContext) -> Result<S>,
{
    let prepared = prepare_report(config, fs)?;

    if let Some(output_file) = &context.output_file {
        let value = serde_json::to_string(&prepared.current)
            .context("Failed to serialize the size output")?;
        workflow::set_output(output_file, SIZE_OUTPUT, &value)?;
        info!("Wrote '{}' output to {}", SIZE_OUTPUT, output_file.display());
    }

    if !options.json {
        print_summary(&prepared.table);
    }

    if options.dry_run {
        if options.json {
            JsonOutput::from_table(&prepared.table).print();
        } else {
            println!();
            println!("{}", prepared.markdown);
        }
        return Ok(None);
    }

    let outcome = match context.comment_target()? {
        CommentTarget::NoPullRequest => {
            let message = skip_message(context);
            // stdout carries the JSON document in --json mode
            if options.json {
                eprintln!("{}", workflow::notice_command(&message));
            } else {
                workflow::notice(&message);
            }
            ReconcileOutcome::Skipped
        }
        target @ CommentTarget::PullRequest(_) => {
            let store = connect(context)?;
            reconcile(&store, &target, &prepared.markdown, config.update_policy)
                .context("Failed to publish the size report comment")?
        }
    };

    if options.json {
        JsonOutput::from_table(&prepared.table)
            .with_comment(outcome_label(&outcome))
            .print();
    } else {
        print_outcome(&outcome);
    }

    Ok(Some(outcome))
}

/// Notice text for a run that has no pull request to comment on
fn skip_message(context: &ActionContext) -> String {
    match context.event_name.as_deref() {
        Some(event) => format!(
            "Not a pull request run (event: {}), skipping the size report comment",
            event
        ),
        None => "Not a pull request run, skipping the size report comment".to_string(),
    }
}

/// Scan, filter, compare and render
///
/// # Errors
///
/// Returns the scanner's error for an unreadable current or baseline path,
/// and `InvalidGlob` for a bad pattern.
pub fn prepare_report<FS: SizeSource>(config: &ReportConfig, fs: &FS) -> Result<PreparedReport> {
    let filter = config.glob_filter()?;

    let current = scan_with_fs(&config.path, fs)
        .with_context(|| format!("Failed to scan {}", config.path.display()))?;
    info!(
        "Scanned {} files in {}",
        current.len(),
        config.path.display()
    );

    let baseline = match &config.diff_path {
        Some(diff_path) => {
            let baseline = scan_with_fs(diff_path, fs)
                .with_context(|| format!("Failed to scan baseline {}", diff_path.display()))?;
            info!(
                "Scanned {} baseline files in {}",
                baseline.len(),
                diff_path.display()
            );
            Some(filter.apply(&baseline))
        }
        None => None,
    };

    let table = compare(&filter.apply(&current), baseline.as_ref());
    let markdown = render_markdown(&table);

    Ok(PreparedReport {
        current,
        table,
        markdown,
    })
}

fn outcome_label(outcome: &ReconcileOutcome) -> &'static str {
    match outcome {
        ReconcileOutcome::Created => "created",
        ReconcileOutcome::Updated { .. } => "updated",
        ReconcileOutcome::Skipped => "skipped",
    }
}

fn print_summary(table: &ReportTable) {
    println!("{} {}", CHART, style("Bundle Size Report").bold());
    for row in &table.rows {
        let delta = row
            .delta_bytes
            .map(|d| format!(" ({})", delta_string(d)))
            .unwrap_or_default();
        println!(
            "   {:<40} {:>12}{}",
            row.name,
            bytes_to_size(row.current_bytes),
            delta
        );
    }

    let total_delta = table
        .total_delta_bytes()
        .map(|d| format!(" ({})", delta_string(d)))
        .unwrap_or_default();
    println!(
        "   {:<40} {:>12}{}",
        style("Total").bold(),
        style(bytes_to_size(table.total_current_bytes)).cyan(),
        total_delta
    );
}

fn print_outcome(outcome: &ReconcileOutcome) {
    match outcome {
        ReconcileOutcome::Created => {
            println!("{} Posted size report comment", CHECKMARK);
        }
        ReconcileOutcome::Updated { comment_id } => {
            println!(
                "{} Updated size report comment {}",
                CHECKMARK,
                style(comment_id).dim()
            );
        }
        ReconcileOutcome::Skipped => {
            println!("{} Not a pull request, comment skipped", INFO);
        }
    }
}
