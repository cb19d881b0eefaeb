//! Infrastructure traits for abstracting I/O operations.
//!
//! The scanner only needs two filesystem primitives. Keeping them behind a
//! trait lets tests feed in-memory trees instead of writing files to disk.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Result of a `stat` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// True for directories
    pub is_directory: bool,
    /// True for regular files (not FIFOs, sockets or device nodes)
    pub is_file: bool,
    /// Length in bytes (meaningless unless `is_file`)
    pub size_bytes: u64,
}

/// Trait for abstracting the filesystem operations the scanner uses.
pub trait SizeSource {
    /// Get type and size for a file or directory. Symlinks are followed.
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// List the names of the immediate children of a directory.
    ///
    /// Names are returned as the OS gives them, so joining one onto `path`
    /// always addresses the child, whatever its encoding.
    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl SizeSource for RealFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = std::fs::metadata(path)?;
        Ok(FileStat {
            is_directory: metadata.is_dir(),
            is_file: metadata.is_file(),
            size_bytes: metadata.len(),
        })
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemoryNode {
    Directory,
    File(u64),
    /// FIFO, socket or device node
    Special,
}

/// In-memory tree for scanner tests. Children list in insertion order.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryFileSystem {
    nodes: Vec<(std::path::PathBuf, MemoryNode)>,
    denied: Vec<std::path::PathBuf>,
}

#[cfg(test)]
impl MemoryFileSystem {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating missing parent directories.
    pub(crate) fn with_file(self, path: &str, size: u64) -> Self {
        self.with_node(path, MemoryNode::File(size))
    }

    /// Add a non-regular file such as a named pipe.
    pub(crate) fn with_special(self, path: &str) -> Self {
        self.with_node(path, MemoryNode::Special)
    }

    /// Add a directory (and its parents) if not already present.
    pub(crate) fn with_dir(mut self, path: &str) -> Self {
        let path = Path::new(path);
        if path.as_os_str().is_empty() || self.find(path).is_some() {
            return self;
        }
        if let Some(parent) = path.parent() {
            self = self.with_dir(&parent.to_string_lossy());
        }
        self.nodes.push((path.to_path_buf(), MemoryNode::Directory));
        self
    }

    /// Make every access to `path` fail with PermissionDenied.
    pub(crate) fn deny(mut self, path: &str) -> Self {
        self.denied.push(Path::new(path).to_path_buf());
        self
    }

    fn with_node(mut self, path: &str, node: MemoryNode) -> Self {
        let path = Path::new(path);
        if let Some(parent) = path.parent() {
            self = self.with_dir(&parent.to_string_lossy());
        }
        self.nodes.push((path.to_path_buf(), node));
        self
    }

    fn find(&self, path: &Path) -> Option<MemoryNode> {
        self.nodes
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, node)| *node)
    }

    fn check_access(&self, path: &Path) -> io::Result<()> {
        if self.denied.iter().any(|d| d == path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        }
        Ok(())
    }
}

#[cfg(test)]
impl SizeSource for MemoryFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        self.check_access(path)?;
        let node = self
            .find(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such node"))?;
        Ok(FileStat {
            is_directory: node == MemoryNode::Directory,
            is_file: matches!(node, MemoryNode::File(_)),
            size_bytes: match node {
                MemoryNode::File(size) => size,
                _ => 0,
            },
        })
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<OsString>> {
        self.check_access(path)?;
        match self.find(path) {
            Some(MemoryNode::Directory) => Ok(self
                .nodes
                .iter()
                .filter(|(p, _)| p.parent() == Some(path))
                .filter_map(|(p, _)| p.file_name())
                .map(|n| n.to_os_string())
                .collect()),
            Some(_) => Err(io::Error::other("not a directory")),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no such node")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_stat_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("app.js");
        fs::write(&file_path, b"content").unwrap();

        let stat = RealFileSystem.stat(&file_path).unwrap();
        assert!(!stat.is_directory);
        assert!(stat.is_file);
        assert_eq!(stat.size_bytes, 7); // "content" is 7 bytes
    }

    #[test]
    fn test_real_filesystem_stat_directory() {
        let temp_dir = TempDir::new().unwrap();

        let stat = RealFileSystem.stat(temp_dir.path()).unwrap();
        assert!(stat.is_directory);
        assert!(!stat.is_file);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_filesystem_socket_is_not_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let socket = temp_dir.path().join("server.sock");
        let _listener = std::os::unix::net::UnixListener::bind(&socket).unwrap();

        let stat = RealFileSystem.stat(&socket).unwrap();
        assert!(!stat.is_directory);
        assert!(!stat.is_file);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_real_filesystem_list_children_keeps_raw_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let raw = OsStr::from_bytes(b"bad\xffname.js");
        fs::write(temp_dir.path().join(raw), b"x").unwrap();

        let children = RealFileSystem.list_children(temp_dir.path()).unwrap();
        assert_eq!(children, vec![raw.to_os_string()]);
        assert!(RealFileSystem.stat(&temp_dir.path().join(&children[0])).unwrap().is_file);
    }

    #[test]
    fn test_real_filesystem_list_children() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("file1.txt"), b"test1").unwrap();
        fs::write(temp_dir.path().join("file2.txt"), b"test2").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let mut children = RealFileSystem.list_children(temp_dir.path()).unwrap();
        children.sort();

        assert_eq!(children, vec!["file1.txt", "file2.txt", "nested"]);
    }

    #[test]
    fn test_real_filesystem_stat_nonexistent_returns_not_found() {
        let result = RealFileSystem.stat(Path::new("/nonexistent/file.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_real_filesystem_list_children_of_file_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("app.js");
        fs::write(&file_path, b"x").unwrap();

        assert!(RealFileSystem.list_children(&file_path).is_err());
    }

    #[test]
    fn test_memory_filesystem_lists_children_in_insertion_order() {
        let fs = MemoryFileSystem::new()
            .with_file("dist/b.js", 2)
            .with_file("dist/a.js", 1)
            .with_file("dist/assets/logo.png", 3);

        let children = fs.list_children(Path::new("dist")).unwrap();
        assert_eq!(children, vec!["b.js", "a.js", "assets"]);
        assert!(fs.stat(Path::new("dist/assets")).unwrap().is_directory);
        assert!(fs.stat(Path::new("dist/a.js")).unwrap().is_file);
    }

    #[test]
    fn test_memory_filesystem_special_node_is_neither_file_nor_directory() {
        let fs = MemoryFileSystem::new().with_special("dist/pipe");

        let stat = fs.stat(Path::new("dist/pipe")).unwrap();
        assert!(!stat.is_file);
        assert!(!stat.is_directory);
    }
}
