//! Filesystem-backed directory listing for the browser contexts.

use std::fs;

use menu::{extension_matches, DirectoryLister, FileEntry, ListError, ListResult};

/// Lists real directories. Directories sort before files, both groups
/// case-insensitively by name.
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &str, ext_filter: &str) -> ListResult<Vec<FileEntry>> {
        let metadata = fs::metadata(path).map_err(|source| ListError::Io {
            path: path.to_string(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ListError::NotADirectory(path.to_string()));
        }

        let reader = fs::read_dir(path).map_err(|source| ListError::Io {
            path: path.to_string(),
            source,
        })?;

        let mut entries = Vec::new();
        for item in reader {
            let item = item.map_err(|source| ListError::Io {
                path: path.to_string(),
                source,
            })?;
            let name = item.file_name().to_string_lossy().into_owned();
            let is_directory = item.file_type().map(|kind| kind.is_dir()).unwrap_or(false);
            if is_directory || extension_matches(&name, ext_filter) {
                entries.push(FileEntry { name, is_directory });
            }
        }

        entries.sort_by(|a, b| {
            b.is_directory
                .cmp(&a.is_directory)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(entries)
    }
}
