//! JSON output formatting for CI/CD integration

use crate::fmt::{bytes_to_size, delta_string};
use crate::report::{ReportTable, TableMode};
use serde::{Deserialize, Serialize};

/// JSON output structure for `report --json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// "single" or "diff"
    pub mode: String,
    /// One entry per reported file
    pub files: Vec<FileInfo>,
    /// Sum of current sizes
    pub total: SizeInfo,
    /// Sum of matched baseline sizes (diff mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_total: Option<SizeInfo>,
    /// Grand-total delta in bytes (diff mode only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_bytes: Option<i64>,
    /// Outcome of the comment step ("created", "updated", "skipped"), if it ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Size in bytes plus its rendered form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeInfo {
    /// Size in bytes
    pub bytes: u64,
    /// Formatted string (e.g., "500.00 KB")
    pub formatted: String,
}

impl SizeInfo {
    /// Create size info from bytes
    pub fn new(bytes: u64) -> Self {
        Self {
            bytes,
            formatted: bytes_to_size(bytes),
        }
    }
}

/// One file row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// File name
    pub name: String,
    /// Current size
    pub size: SizeInfo,
    /// Baseline size, if the file existed in the baseline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<SizeInfo>,
    /// Signed delta in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_bytes: Option<i64>,
    /// Rendered delta ("+2.34 KB 🔼", "No change", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

impl JsonOutput {
    /// Build the output from a comparison
    pub fn from_table(table: &ReportTable) -> Self {
        let files = table
            .rows
            .iter()
            .map(|row| FileInfo {
                name: row.name.clone(),
                size: SizeInfo::new(row.current_bytes),
                baseline: row.baseline_bytes.map(SizeInfo::new),
                delta_bytes: row.delta_bytes,
                delta: row.delta_bytes.map(delta_string),
            })
            .collect();

        Self {
            mode: match table.mode {
                TableMode::Single => "single",
                TableMode::Diff => "diff",
            }
            .to_string(),
            files,
            total: SizeInfo::new(table.total_current_bytes),
            baseline_total: table.total_baseline_bytes.map(SizeInfo::new),
            delta_bytes: table.total_delta_bytes(),
            comment: None,
        }
    }

    /// Record the comment step outcome
    pub fn with_comment(mut self, outcome: &str) -> Self {
        self.comment = Some(outcome.to_string());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))
    }

    /// Print JSON to stdout
    pub fn print(&self) {
        match self.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error formatting JSON: {}", e),
        }
    }
}
