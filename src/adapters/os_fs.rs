//! Filesystem adapter over `std::fs`.

use std::io;
use std::path::Path;

use crate::traits::FileSystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_and_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hello.txt");
        std::fs::write(&path, "hi").unwrap();

        let fs = OsFileSystem::new();
        assert!(fs.exists(&path));
        assert!(!fs.exists(&dir.path().join("missing.txt")));
        assert_eq!(fs.read_file(&path).unwrap(), b"hi");
    }
}
