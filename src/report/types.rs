//! Size report data structures

use serde::{Deserialize, Serialize};

/// Size of one reported file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    /// File name (no directory component)
    pub name: String,
    /// Size in bytes
    pub bytes: u64,
}

impl SizeEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, bytes: u64) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Sizes of the files under one scanned path, in enumeration order
///
/// Serializes as a plain JSON array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeReport {
    entries: Vec<SizeEntry>,
}

impl SizeReport {
    /// Create a report from scanned entries
    pub fn new(entries: Vec<SizeEntry>) -> Self {
        Self { entries }
    }

    /// Entries in enumeration order
    pub fn entries(&self) -> &[SizeEntry] {
        &self.entries
    }

    /// Sum of all entry sizes
    pub fn total_bytes(&self) -> u64 {
        self.entries.iter().map(|e| e.bytes).sum()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no files were reported
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<SizeEntry> for SizeReport {
    fn from_iter<I: IntoIterator<Item = SizeEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One file in a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    /// File name
    pub name: String,
    /// Size in the current build
    pub current_bytes: u64,
    /// Size in the baseline build, if the file existed there
    pub baseline_bytes: Option<u64>,
    /// `current - baseline` (positive = grew), if a baseline existed
    pub delta_bytes: Option<i64>,
}

/// Whether the table carries baseline columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    /// Current sizes only
    Single,
    /// Current sizes compared against a baseline
    Diff,
}

/// Comparison ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    /// Column layout
    pub mode: TableMode,
    /// Rows in current-report order
    pub rows: Vec<DiffRow>,
    /// Sum of every current entry
    pub total_current_bytes: u64,
    /// Sum of the baseline entries that matched a current entry (diff mode only)
    pub total_baseline_bytes: Option<u64>,
}

impl ReportTable {
    /// Grand-total delta (diff mode only)
    pub fn total_delta_bytes(&self) -> Option<i64> {
        self.total_baseline_bytes
            .map(|baseline| signed_delta(self.total_current_bytes, baseline))
    }
}

/// `current - baseline` as a signed value, saturating at the i64 range
pub(crate) fn signed_delta(current: u64, baseline: u64) -> i64 {
    if current >= baseline {
        i64::try_from(current - baseline).unwrap_or(i64::MAX)
    } else {
        i64::try_from(baseline - current).map_or(i64::MIN, |d| -d)
    }
}
