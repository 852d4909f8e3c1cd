//! Full-text search over an archive's text files.
//!
//! - `filter` decides which tree nodes are searchable and snapshots them
//!   once per tree
//! - `matches` finds literal, case-insensitive matches line by line
//! - `engine` drives the scan: sequential content reads, binary and
//!   unreadable files skipped, results in tree pre-order

mod engine;
mod filter;
mod matches;

pub use engine::{run_search, FileSearchResult, SearchOutcome};
pub use filter::{is_searchable_file, SearchIndex, SEARCHABLE_EXTENSIONS};
pub use matches::{find_line_matches, LineMatch};
