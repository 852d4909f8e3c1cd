//! In-memory archive loading.
//!
//! A [`LoadedArchive`] is the decode collaborator the rest of the crate is
//! built on: it parses a ZIP/JAR container once, records the flat entry
//! list in archive order, and decompresses file contents into an in-memory
//! map keyed by normalized path. The archive is immutable after
//! construction and is shared read-only between tree materialization,
//! content reads and downloads.

use std::io::{Cursor, Read, Seek, SeekFrom};

use fnv::FnvHashMap;
use zip::ZipArchive;

use crate::error::{ArchiveError, Result};

/// One record from the archive's entry table.
///
/// `path` is normalized (no leading or trailing separators, no empty
/// segments) and case-sensitive. `uncompressed_size` is zero for
/// directory entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub is_directory: bool,
    pub uncompressed_size: u64,
}

/// A fully loaded, immutable archive.
#[derive(Debug)]
pub struct LoadedArchive {
    /// Flat entry list in archive order.
    entries: Vec<ArchiveEntry>,
    /// File storage: normalized path -> decompressed content.
    contents: FnvHashMap<String, Vec<u8>>,
}

impl LoadedArchive {
    /// Parses an archive from raw bytes.
    ///
    /// The container structure is validated up front; unparseable bytes fail
    /// the whole load with [`ArchiveError::Format`] and leave nothing behind.
    /// Individual corrupt entries are skipped with a warning so one bad
    /// record does not take down the rest of the archive.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes_with_limit(bytes, None)
    }

    /// Parses an archive from raw bytes, enforcing an optional size ceiling.
    ///
    /// Size validation normally happens before bytes reach this crate; the
    /// limit is for callers that want to delegate it.
    pub fn from_bytes_with_limit(bytes: Vec<u8>, max_size: Option<u64>) -> Result<Self> {
        let mut reader = Cursor::new(bytes);
        if let Some(limit) = max_size {
            let size = reader.seek(SeekFrom::End(0))?;
            if size > limit {
                return Err(ArchiveError::TooLarge { size, limit });
            }
            reader.seek(SeekFrom::Start(0))?;
        }

        let mut zip = ZipArchive::new(reader)?;
        let mut entries = Vec::with_capacity(zip.len());
        let mut contents =
            FnvHashMap::with_capacity_and_hasher(zip.len(), Default::default());

        for i in 0..zip.len() {
            let mut file = match zip.by_index(i) {
                Ok(file) => file,
                Err(error) => {
                    log::warn!("skipping corrupt archive entry #{i}: {error}");
                    continue;
                }
            };

            let Some(path) = normalize_entry_path(file.name()) else {
                log::warn!("skipping archive entry with unusable path: {:?}", file.name());
                continue;
            };

            let is_directory = file.is_dir();
            if is_directory {
                entries.push(ArchiveEntry {
                    path,
                    is_directory: true,
                    uncompressed_size: 0,
                });
                continue;
            }

            let mut data = Vec::new();
            if data.try_reserve_exact(file.size() as usize).is_err() {
                log::warn!("skipping archive entry {path}: content too large to buffer");
                continue;
            }
            if let Err(error) = file.read_to_end(&mut data) {
                log::warn!("skipping archive entry {path}: {error}");
                continue;
            }

            entries.push(ArchiveEntry {
                path: path.clone(),
                is_directory: false,
                uncompressed_size: file.size(),
            });
            contents.insert(path, data);
        }

        log::debug!(
            "loaded archive: {} entries, {} file contents buffered",
            entries.len(),
            contents.len()
        );

        Ok(Self { entries, contents })
    }

    /// The flat entry list, in archive order.
    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Raw decompressed bytes of a file entry.
    ///
    /// Directory paths and unknown paths both fail with
    /// [`ArchiveError::EntryNotFound`]; directories have no content.
    pub fn read_entry(&self, path: &str) -> Result<&[u8]> {
        self.contents
            .get(path)
            .map(Vec::as_slice)
            .ok_or_else(|| ArchiveError::EntryNotFound(path.to_string()))
    }

    /// Whether the archive contains a file entry at `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.contents.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalizes an entry path to slash-separated segments.
///
/// Strips leading separators and `.` segments, collapses doubled
/// separators, and rejects paths that are empty after normalization or
/// that try to escape the archive root with `..`. Case is preserved;
/// path identity is case-sensitive.
fn normalize_entry_path(raw: &str) -> Option<String> {
    let mut segments = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            _ => segments.push(segment),
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_zip;

    #[test]
    fn loads_files_and_directories() {
        let bytes = build_zip(&[
            ("docs/", None),
            ("docs/guide.md", Some(b"# Guide")),
            ("src/main.rs", Some(b"fn main() {}")),
        ]);
        let archive = LoadedArchive::from_bytes(bytes).unwrap();

        assert_eq!(archive.len(), 3);
        assert_eq!(
            archive.entries()[0],
            ArchiveEntry {
                path: "docs".to_string(),
                is_directory: true,
                uncompressed_size: 0,
            }
        );
        assert_eq!(archive.entries()[1].path, "docs/guide.md");
        assert_eq!(archive.entries()[1].uncompressed_size, 7);
        assert!(!archive.entries()[1].is_directory);
        assert_eq!(archive.read_entry("src/main.rs").unwrap(), b"fn main() {}");
    }

    #[test]
    fn read_entry_unknown_path_fails() {
        let bytes = build_zip(&[("a.txt", Some(b"a"))]);
        let archive = LoadedArchive::from_bytes(bytes).unwrap();

        let error = archive.read_entry("missing.txt").unwrap_err();
        assert!(matches!(error, ArchiveError::EntryNotFound(path) if path == "missing.txt"));
    }

    #[test]
    fn read_entry_directory_fails() {
        let bytes = build_zip(&[("dir/", None), ("dir/a.txt", Some(b"a"))]);
        let archive = LoadedArchive::from_bytes(bytes).unwrap();

        assert!(matches!(
            archive.read_entry("dir"),
            Err(ArchiveError::EntryNotFound(_))
        ));
    }

    #[test]
    fn malformed_bytes_fail_with_format_error() {
        let error = LoadedArchive::from_bytes(b"not a zip archive".to_vec()).unwrap_err();
        assert!(matches!(error, ArchiveError::Format(_)));
    }

    #[test]
    fn empty_archive_is_empty() {
        let bytes = build_zip(&[]);
        let archive = LoadedArchive::from_bytes(bytes).unwrap();
        assert!(archive.is_empty());
        assert!(archive.entries().is_empty());
    }

    #[test]
    fn size_limit_is_enforced() {
        let bytes = build_zip(&[("a.txt", Some(b"some content here"))]);
        let size = bytes.len() as u64;

        let error = LoadedArchive::from_bytes_with_limit(bytes.clone(), Some(4)).unwrap_err();
        assert!(matches!(error, ArchiveError::TooLarge { limit: 4, .. }));

        assert!(LoadedArchive::from_bytes_with_limit(bytes, Some(size)).is_ok());
    }

    #[test]
    fn entry_paths_are_normalized() {
        let bytes = build_zip(&[
            ("./weird//path.txt", Some(b"x")),
            ("/rooted.txt", Some(b"y")),
        ]);
        let archive = LoadedArchive::from_bytes(bytes).unwrap();

        assert_eq!(archive.read_entry("weird/path.txt").unwrap(), b"x");
        assert_eq!(archive.read_entry("rooted.txt").unwrap(), b"y");
    }

    #[test]
    fn escaping_paths_are_dropped() {
        let bytes = build_zip(&[("../escape.txt", Some(b"x")), ("ok.txt", Some(b"y"))]);
        let archive = LoadedArchive::from_bytes(bytes).unwrap();

        assert_eq!(archive.len(), 1);
        assert!(archive.contains("ok.txt"));
        assert!(!archive.contains("../escape.txt"));
    }

    #[test]
    fn normalize_entry_path_cases() {
        assert_eq!(normalize_entry_path("a/b.txt"), Some("a/b.txt".to_string()));
        assert_eq!(normalize_entry_path("a//b"), Some("a/b".to_string()));
        assert_eq!(normalize_entry_path("./a"), Some("a".to_string()));
        assert_eq!(normalize_entry_path("dir/"), Some("dir".to_string()));
        assert_eq!(normalize_entry_path(""), None);
        assert_eq!(normalize_entry_path("///"), None);
        assert_eq!(normalize_entry_path("a/../b"), None);
    }
}
