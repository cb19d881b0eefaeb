//! Current-vs-baseline size comparison

use super::types::{signed_delta, DiffRow, ReportTable, SizeReport, TableMode};
use log::debug;
use std::collections::HashMap;

/// Compare a current report against an optional baseline
///
/// Rows follow the current report's order. Files that exist only in the
/// baseline produce no row, and their sizes are left out of the baseline
/// total, so the grand-total delta covers matched files plus new files.
///
/// # Examples
///
/// ```
/// use bundle_size_report::report::{compare, SizeEntry, SizeReport, TableMode};
///
/// let current = SizeReport::new(vec![SizeEntry::new("app.js", 1500)]);
/// let baseline = SizeReport::new(vec![SizeEntry::new("app.js", 1000)]);
///
/// let table = compare(&current, Some(&baseline));
/// assert_eq!(table.mode, TableMode::Diff);
/// assert_eq!(table.rows[0].delta_bytes, Some(500));
/// assert_eq!(table.total_delta_bytes(), Some(500));
/// ```
pub fn compare(current: &SizeReport, baseline: Option<&SizeReport>) -> ReportTable {
    let Some(baseline) = baseline else {
        return ReportTable {
            mode: TableMode::Single,
            rows: current
                .entries()
                .iter()
                .map(|entry| DiffRow {
                    name: entry.name.clone(),
                    current_bytes: entry.bytes,
                    baseline_bytes: None,
                    delta_bytes: None,
                })
                .collect(),
            total_current_bytes: current.total_bytes(),
            total_baseline_bytes: None,
        };
    };

    let lookup: HashMap<&str, u64> = baseline
        .entries()
        .iter()
        .map(|e| (e.name.as_str(), e.bytes))
        .collect();

    let mut total_baseline_bytes = 0u64;
    let rows: Vec<DiffRow> = current
        .entries()
        .iter()
        .map(|entry| {
            let baseline_bytes = lookup.get(entry.name.as_str()).copied();
            if let Some(bytes) = baseline_bytes {
                total_baseline_bytes += bytes;
            }
            DiffRow {
                name: entry.name.clone(),
                current_bytes: entry.bytes,
                baseline_bytes,
                delta_bytes: baseline_bytes.map(|b| signed_delta(entry.bytes, b)),
            }
        })
        .collect();

    let matched = rows.iter().filter(|r| r.baseline_bytes.is_some()).count();
    debug!(
        "Compared {} files against baseline ({} matched, {} baseline-only)",
        rows.len(),
        matched,
        baseline.len().saturating_sub(matched)
    );

    ReportTable {
        mode: TableMode::Diff,
        rows,
        total_current_bytes: current.total_bytes(),
        total_baseline_bytes: Some(total_baseline_bytes),
    }
}
