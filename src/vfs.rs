use crate::errors::{FileOperation, IoError};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Capability interface over the storage the scaffolder reads templates from
/// and writes projects to. Keeping the tree walk behind this trait lets the
/// planning and apply logic run against an in-memory double in tests.
pub trait Filesystem {
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, IoError>;
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, IoError>;
    fn make_dir(&mut self, path: &Path) -> Result<(), IoError>;
    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<(), IoError>;
}

/// [`Filesystem`] backed by `std::fs`.
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_children(&self, path: &Path) -> Result<Vec<PathBuf>, IoError> {
        let entries = fs::read_dir(path)
            .map_err(|error| IoError::new(FileOperation::List, path.to_path_buf(), error))?;

        let mut children = Vec::new();

        for entry in entries {
            let entry = entry
                .map_err(|error| IoError::new(FileOperation::List, path.to_path_buf(), error))?;

            children.push(entry.path());
        }

        // readdir order is platform-dependent; sort for a stable staging order
        children.sort();

        Ok(children)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, IoError> {
        fs::read(path).map_err(|error| IoError::new(FileOperation::Read, path.to_path_buf(), error))
    }

    fn make_dir(&mut self, path: &Path) -> Result<(), IoError> {
        fs::create_dir_all(path)
            .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))
    }

    fn write_file(&mut self, path: &Path, contents: &[u8]) -> Result<(), IoError> {
        fs::write(path, contents)
            .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))
    }
}

/// A single staged file or directory, addressed relative to the destination
/// root it will be applied under.
#[derive(Debug, Clone)]
pub struct VirtualEntry {
    pub destination: PathBuf,
    /// File contents; `None` for directories.
    pub content: Option<Vec<u8>>,
    pub is_file: bool,
}

impl VirtualEntry {
    pub fn file(destination: PathBuf, content: Vec<u8>) -> Self {
        Self {
            destination,
            content: Some(content),
            is_file: true,
        }
    }

    pub fn directory(destination: PathBuf) -> Self {
        Self {
            destination,
            content: None,
            is_file: false,
        }
    }
}

/// The full copy plan, staged in memory before anything touches disk.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}

impl VirtualFS {
    pub fn new() -> Self {
        Self::default()
    }
}
