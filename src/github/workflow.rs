//! GitHub Actions workflow commands and step outputs

use crate::error::ReportError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Escape data for a `::command::data` line
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format a notice annotation
///
/// # Examples
///
/// ```
/// use bundle_size_report::github::workflow::notice_command;
///
/// assert_eq!(notice_command("a\nb"), "::notice::a%0Ab");
/// ```
pub fn notice_command(message: &str) -> String {
    format!("::notice::{}", escape_data(message))
}

/// Format an error annotation
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Print a notice annotation to stdout, where the runner picks it up
pub fn notice(message: &str) {
    println!("{}", notice_command(message));
}

/// Print an error annotation to stdout
pub fn error(message: &str) {
    println!("{}", error_command(message));
}

/// Append `name=value` to the step output file
///
/// Uses the multi-line `name<<DELIMITER` form with a random delimiter, so
/// values may contain newlines.
///
/// # Errors
///
/// Returns `Io` if the file cannot be opened or written.
pub fn set_output(output_file: &Path, name: &str, value: &str) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        context: format!("writing step output to {}", output_file.display()),
        source,
    };

    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_file)
        .map_err(io_error)?;

    write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n").map_err(io_error)
}
