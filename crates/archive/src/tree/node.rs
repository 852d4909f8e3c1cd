//! Tree node types and traversal helpers.

use serde::{Deserialize, Serialize};

/// What a node is: a file with a known uncompressed size, or a directory
/// that owns its children. Files never carry a child list and directories
/// always do, by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File { size: u64 },
    Directory { children: Vec<FileTreeNode> },
}

/// One materialized archive entry or implied directory.
///
/// `path` is the full slash-joined path from the archive root and uniquely
/// identifies the node across the whole tree; `name` is the final path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTreeNode {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
}

impl FileTreeNode {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Uncompressed byte size; `None` for directories.
    pub fn size(&self) -> Option<u64> {
        match self.kind {
            NodeKind::File { size } => Some(size),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Child nodes; `None` for files.
    pub fn children(&self) -> Option<&[FileTreeNode]> {
        match &self.kind {
            NodeKind::Directory { children } => Some(children),
            NodeKind::File { .. } => None,
        }
    }
}

/// Pre-order iterator over a forest, in document order.
///
/// Children are visited in their stored order, so with a materialized tree
/// this yields directories-first, name-sorted traversal at every depth.
pub fn iter_preorder(roots: &[FileTreeNode]) -> PreorderIter<'_> {
    PreorderIter {
        stack: roots.iter().rev().collect(),
    }
}

#[derive(Debug)]
pub struct PreorderIter<'a> {
    stack: Vec<&'a FileTreeNode>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a FileTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}

/// Looks a node up by its full path.
pub fn find_node<'a>(roots: &'a [FileTreeNode], path: &str) -> Option<&'a FileTreeNode> {
    let mut level = roots;
    let mut node = None;
    for segment in path.split('/') {
        let found = level.iter().find(|candidate| candidate.name == segment)?;
        level = found.children().unwrap_or(&[]);
        node = Some(found);
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, path: &str) -> FileTreeNode {
        FileTreeNode {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::File { size: 1 },
        }
    }

    fn dir(name: &str, path: &str, children: Vec<FileTreeNode>) -> FileTreeNode {
        FileTreeNode {
            name: name.to_string(),
            path: path.to_string(),
            kind: NodeKind::Directory { children },
        }
    }

    fn sample() -> Vec<FileTreeNode> {
        vec![
            dir(
                "a",
                "a",
                vec![
                    dir("c", "a/c", vec![file("d.txt", "a/c/d.txt")]),
                    file("b.txt", "a/b.txt"),
                ],
            ),
            file("root.txt", "root.txt"),
        ]
    }

    #[test]
    fn preorder_visits_document_order() {
        let roots = sample();
        let paths: Vec<&str> = iter_preorder(&roots).map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["a", "a/c", "a/c/d.txt", "a/b.txt", "root.txt"]);
    }

    #[test]
    fn find_node_by_path() {
        let roots = sample();
        assert_eq!(find_node(&roots, "a/c/d.txt").unwrap().name, "d.txt");
        assert!(find_node(&roots, "a/c").unwrap().is_directory());
        assert!(find_node(&roots, "a/missing.txt").is_none());
        assert!(find_node(&roots, "").is_none());
    }

    #[test]
    fn kind_accessors() {
        let roots = sample();
        let file = find_node(&roots, "a/b.txt").unwrap();
        assert_eq!(file.size(), Some(1));
        assert!(file.children().is_none());

        let dir = find_node(&roots, "a").unwrap();
        assert_eq!(dir.size(), None);
        assert_eq!(dir.children().unwrap().len(), 2);
    }
}
