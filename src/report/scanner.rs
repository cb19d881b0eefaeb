//! Build output size scanning
//!
//! A file path reports itself; a directory reports its immediate files.
//! Subdirectories are neither recursed into nor reported as aggregates.

use super::types::{SizeEntry, SizeReport};
use crate::error::ReportError;
use crate::infra::{RealFileSystem, SizeSource};
use log::{debug, warn};
use std::path::Path;

/// Scan a file or directory on the real filesystem
///
/// # Examples
///
/// ```no_run
/// use bundle_size_report::report::scan;
/// use std::path::Path;
///
/// let report = scan(Path::new("dist"))?;
/// println!("{} files, {} bytes", report.len(), report.total_bytes());
/// # Ok::<(), bundle_size_report::error::ReportError>(())
/// ```
///
/// # Errors
///
/// Returns `PathNotFound` or `PermissionDenied` when `path` itself cannot be
/// read, and `Io` for any other filesystem failure.
pub fn scan(path: &Path) -> Result<SizeReport, ReportError> {
    scan_with_fs(path, &RealFileSystem)
}

/// Scan with a custom filesystem implementation
pub fn scan_with_fs<FS: SizeSource>(path: &Path, fs: &FS) -> Result<SizeReport, ReportError> {
    let stat = fs
        .stat(path)
        .map_err(|e| ReportError::from_scan(path, e))?;

    if !stat.is_directory {
        if !stat.is_file {
            warn!("{} is not a regular file; nothing to report", path.display());
            return Ok(SizeReport::default());
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        debug!("{} is a file ({} bytes)", path.display(), stat.size_bytes);
        return Ok(SizeReport::new(vec![SizeEntry::new(name, stat.size_bytes)]));
    }

    let children = fs
        .list_children(path)
        .map_err(|e| ReportError::from_scan(path, e))?;

    let mut entries = Vec::with_capacity(children.len());
    for name in children {
        let child = path.join(&name);
        let stat = match fs.stat(&child) {
            Ok(stat) => stat,
            // Dangling symlink or a file removed mid-scan
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Skipping {}: {}", child.display(), e);
                continue;
            }
            Err(e) => return Err(ReportError::from_scan(child, e)),
        };

        if stat.is_directory {
            debug!("Skipping subdirectory {}", child.display());
            continue;
        }
        if !stat.is_file {
            debug!("Skipping non-regular file {}", child.display());
            continue;
        }
        entries.push(SizeEntry::new(name.to_string_lossy(), stat.size_bytes));
    }

    debug!("Scanned {} files in {}", entries.len(), path.display());
    Ok(SizeReport::new(entries))
}
