//! Markdown rendering of size comparisons

use super::types::{ReportTable, TableMode};
use crate::fmt::{bytes_to_size, delta_string};

/// Opening of every rendered report.
///
/// Comment bodies starting with this text are recognised as earlier reports
/// and updated in place, so it must stay byte-for-byte stable.
pub const REPORT_MARKER: &str =
    "<details>\n\n<summary>Bundled size for the files is listed below:</summary>";

/// Cell text for a file with no baseline counterpart
pub const MISSING_BASELINE: &str = "N/A";

/// Render a comparison as a collapsible markdown table
///
/// # Examples
///
/// ```
/// use bundle_size_report::report::{compare, render_markdown, SizeEntry, SizeReport, REPORT_MARKER};
///
/// let current = SizeReport::new(vec![SizeEntry::new("app.js", 512_000)]);
/// let body = render_markdown(&compare(&current, None));
///
/// assert!(body.starts_with(REPORT_MARKER));
/// assert!(body.contains("| **app.js** | 500.00 KB |"));
/// assert!(body.contains("| Total | 500.00 KB |"));
/// ```
pub fn render_markdown(table: &ReportTable) -> String {
    let mut out = String::new();
    out.push_str(REPORT_MARKER);
    out.push_str("\n\n<br>\n\n");

    match table.mode {
        TableMode::Single => render_single(&mut out, table),
        TableMode::Diff => render_diff(&mut out, table),
    }

    out.push_str("\n</details>");
    out
}

fn render_single(out: &mut String, table: &ReportTable) {
    out.push_str("| File | File Size |\n");
    out.push_str("| --- | --- |\n");
    for row in &table.rows {
        out.push_str(&format!(
            "| **{}** | {} |\n",
            row.name,
            bytes_to_size(row.current_bytes)
        ));
    }
    out.push_str(&format!(
        "| Total | {} |\n",
        bytes_to_size(table.total_current_bytes)
    ));
}

fn render_diff(out: &mut String, table: &ReportTable) {
    out.push_str("| File | File Size | Diff File Size | Delta |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    for row in &table.rows {
        out.push_str(&format!(
            "| **{}** | {} | {} | {} |\n",
            row.name,
            bytes_to_size(row.current_bytes),
            row.baseline_bytes
                .map_or_else(|| MISSING_BASELINE.to_string(), bytes_to_size),
            row.delta_bytes
                .map_or_else(|| MISSING_BASELINE.to_string(), delta_string),
        ));
    }
    out.push_str(&format!(
        "| Total | {} | {} | {} |\n",
        bytes_to_size(table.total_current_bytes),
        bytes_to_size(table.total_baseline_bytes.unwrap_or(0)),
        delta_string(table.total_delta_bytes().unwrap_or(0)),
    ));
}
