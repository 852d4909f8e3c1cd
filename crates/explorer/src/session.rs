//! Session state container.
//!
//! All UI-facing state lives here and changes only through explicit
//! transitions: loading an archive replaces the tree, tabs and highlight
//! wholesale; opening, closing and activating tabs keep their invariants
//! inside the container. The engine pieces stay pure functions of the
//! state they are handed.

use std::sync::Arc;

use archive::{
    find_node, materialize, ContentReader, FileTreeNode, LoadedArchive, SearchIndex,
};
use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, ExplorerResult};
use crate::search::SearchScheduler;

/// One open viewer tab. The entry path is the stable unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTab {
    pub path: String,
}

/// A line highlighted in the viewer, e.g. after jumping to a search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedLine {
    pub path: String,
    /// 1-based line number.
    pub line: u32,
}

/// The explorer session: one loaded archive plus the viewer state on top
/// of it.
#[derive(Debug, Default)]
pub struct ExplorerSession {
    archive: Option<Arc<LoadedArchive>>,
    archive_name: Option<String>,
    tree: Vec<FileTreeNode>,
    search_index: Arc<SearchIndex>,
    open_tabs: Vec<OpenTab>,
    active_tab: Option<usize>,
    highlighted_line: Option<HighlightedLine>,
    search: SearchScheduler,
}

impl ExplorerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads an archive from raw bytes, replacing the whole session state.
    ///
    /// On failure the previous state is left untouched; nothing is mutated
    /// until the bytes have parsed.
    pub fn load_archive(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> ExplorerResult<()> {
        let loaded = Arc::new(LoadedArchive::from_bytes(bytes)?);
        let tree = materialize(loaded.entries());
        let search_index = Arc::new(SearchIndex::build(&tree));

        // Invalidates in-flight searches against the previous archive.
        self.search
            .set_archive(Arc::clone(&search_index), Arc::clone(&loaded) as _);
        self.archive = Some(loaded);
        self.archive_name = Some(name.into());
        self.tree = tree;
        self.search_index = search_index;
        self.open_tabs.clear();
        self.active_tab = None;
        self.highlighted_line = None;
        Ok(())
    }

    /// Discards the loaded archive and all viewer state.
    pub fn reset(&mut self) {
        self.search.clear_archive();
        self.archive = None;
        self.archive_name = None;
        self.tree.clear();
        self.search_index = Arc::default();
        self.open_tabs.clear();
        self.active_tab = None;
        self.highlighted_line = None;
    }

    pub fn archive(&self) -> Option<&Arc<LoadedArchive>> {
        self.archive.as_ref()
    }

    pub fn archive_name(&self) -> Option<&str> {
        self.archive_name.as_deref()
    }

    pub fn tree(&self) -> &[FileTreeNode] {
        &self.tree
    }

    pub fn search_index(&self) -> &Arc<SearchIndex> {
        &self.search_index
    }

    /// The session's search front-end, already pointed at the loaded
    /// archive.
    pub fn search_scheduler(&self) -> &SearchScheduler {
        &self.search
    }

    pub fn open_tabs(&self) -> &[OpenTab] {
        &self.open_tabs
    }

    /// The currently active tab, if any.
    pub fn active_tab(&self) -> Option<&OpenTab> {
        self.active_tab.and_then(|index| self.open_tabs.get(index))
    }

    pub fn highlighted_line(&self) -> Option<&HighlightedLine> {
        self.highlighted_line.as_ref()
    }

    /// Opens a file in a tab, or activates its tab if already open.
    pub fn open_file(&mut self, path: &str) -> ExplorerResult<()> {
        let node = find_node(&self.tree, path)
            .ok_or_else(|| ExplorerError::InvalidInput(format!("no such file: {path}")))?;
        if node.is_directory() {
            return Err(ExplorerError::InvalidInput(format!(
                "not a file: {path}"
            )));
        }

        match self.open_tabs.iter().position(|tab| tab.path == path) {
            Some(index) => self.active_tab = Some(index),
            None => {
                self.open_tabs.push(OpenTab {
                    path: path.to_string(),
                });
                self.active_tab = Some(self.open_tabs.len() - 1);
            }
        }
        Ok(())
    }

    /// Closes a tab. Closing the active tab activates its neighbor.
    pub fn close_tab(&mut self, path: &str) {
        let Some(removed) = self.open_tabs.iter().position(|tab| tab.path == path) else {
            return;
        };
        self.open_tabs.remove(removed);

        self.active_tab = match self.active_tab {
            Some(active) if active == removed => {
                if self.open_tabs.is_empty() {
                    None
                } else {
                    Some(removed.min(self.open_tabs.len() - 1))
                }
            }
            Some(active) if active > removed => Some(active - 1),
            other => other,
        };

        if self
            .highlighted_line
            .as_ref()
            .is_some_and(|highlight| highlight.path == path)
        {
            self.highlighted_line = None;
        }
    }

    /// Activates an already-open tab.
    pub fn activate_tab(&mut self, path: &str) -> ExplorerResult<()> {
        match self.open_tabs.iter().position(|tab| tab.path == path) {
            Some(index) => {
                self.active_tab = Some(index);
                Ok(())
            }
            None => Err(ExplorerError::InvalidInput(format!(
                "tab not open: {path}"
            ))),
        }
    }

    /// Opens (or activates) the file and highlights the given line, e.g.
    /// when the user picks a search match.
    pub fn highlight_line(&mut self, path: &str, line: u32) -> ExplorerResult<()> {
        self.open_file(path)?;
        self.highlighted_line = Some(HighlightedLine {
            path: path.to_string(),
            line,
        });
        Ok(())
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted_line = None;
    }

    /// Decoded text content of a file, for the viewer. Binary content
    /// comes back as the engine's sentinel string, which the viewer
    /// renders as a placeholder.
    pub async fn read_file(&self, path: &str) -> ExplorerResult<String> {
        let archive = self.archive.as_ref().ok_or(ExplorerError::NoArchive)?;
        Ok(archive.read_text(path).await?)
    }

    /// Raw bytes of a file, for the save-file affordance.
    pub fn download(&self, path: &str) -> ExplorerResult<Vec<u8>> {
        let archive = self.archive.as_ref().ok_or(ExplorerError::NoArchive)?;
        Ok(archive.read_entry(path)?.to_vec())
    }
}
