//! Archive exploration engine.
//!
//! This crate provides the core functionality behind the archive explorer:
//! - In-memory loading of ZIP/JAR containers
//! - Materialization of flat entry lists into an ordered file tree
//! - Text decoding with a binary-sentinel fallback
//! - Full-text search over the archive's text files with line-level matches
//! - Version-counter cancellation for superseded searches

pub mod cancel;
pub mod content;
pub mod error;
pub mod format;
pub mod loader;
pub mod search;
pub mod tree;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use cancel::{CancellationToken, SearchVersionTracker};
pub use content::{decode_entry_text, is_binary_sentinel, ContentReader, BINARY_FILE_MARKER};
pub use error::{ArchiveError, Result};
pub use format::human_readable_size;
pub use loader::{ArchiveEntry, LoadedArchive};
pub use search::{find_line_matches, run_search, FileSearchResult, LineMatch, SearchIndex, SearchOutcome};
pub use tree::{find_node, iter_preorder, materialize, FileTreeNode, NodeKind};
