//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Chart emoji for size summaries
pub const CHART: Emoji = Emoji("📊", "~");

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Marker appended to deltas that grew
pub const UP_MARKER: &str = "🔼";

/// Marker appended to deltas that shrank
pub const DOWN_MARKER: &str = "🔽";

/// Unit labels, indexed by power of 1024
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Format bytes as a human-readable size string
///
/// Picks the largest unit whose scaled value is below 1024 (values past the
/// terabyte range stay in TB) and rounds to two decimals.
///
/// # Examples
///
/// ```
/// use bundle_size_report::fmt::bytes_to_size;
///
/// assert_eq!(bytes_to_size(0), "0 Byte");
/// assert_eq!(bytes_to_size(512), "512.00 Bytes");
/// assert_eq!(bytes_to_size(512_000), "500.00 KB");
/// assert_eq!(bytes_to_size(2_048_000), "1.95 MB");
/// ```
pub fn bytes_to_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Byte".to_string();
    }

    let unit = (bytes.ilog(1024) as usize).min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    // Half-away-from-zero so ties like 1.125 render as 1.13
    let rounded = (scaled * 100.0).round() / 100.0;

    format!("{:.2} {}", rounded, UNITS[unit])
}

/// Format a signed byte delta
///
/// # Examples
///
/// ```
/// use bundle_size_report::fmt::delta_string;
///
/// assert_eq!(delta_string(0), "No change");
/// assert_eq!(delta_string(2048), "+2.00 KB 🔼");
/// assert_eq!(delta_string(-512), "-512.00 Bytes 🔽");
/// ```
pub fn delta_string(delta: i64) -> String {
    let magnitude = bytes_to_size(delta.unsigned_abs());
    match delta.signum() {
        0 => "No change".to_string(),
        1 => format!("+{} {}", magnitude, UP_MARKER),
        _ => format!("-{} {}", magnitude, DOWN_MARKER),
    }
}
