//! Flat entry list -> file tree construction.

use std::cmp::Ordering;

use fnv::FnvHashMap;

use crate::loader::ArchiveEntry;

use super::node::{FileTreeNode, NodeKind};

/// Intermediate node storage while paths are being walked.
///
/// Children hold slot indices so linking never fights the borrow checker;
/// the finished tree is realized (and sorted) in a second pass.
#[derive(Debug)]
struct NodeSlot {
    name: String,
    path: String,
    is_directory: bool,
    size: u64,
    children: Vec<usize>,
}

/// Materializes the ordered file tree from a flat entry list.
///
/// Every entry path is split into segments and walked prefix-first: each
/// prefix not seen before becomes a node (a directory unless it is the
/// final segment of a file entry), deduplicated by full path, and linked
/// into its already-materialized parent. Paths that are empty after
/// normalization are skipped. Finally every `children` list is sorted
/// recursively: directories before files, each group in name order.
///
/// The result is a pure function of `entries`: materializing the same
/// archive twice yields an identical tree.
pub fn materialize(entries: &[ArchiveEntry]) -> Vec<FileTreeNode> {
    let mut slots: Vec<NodeSlot> = Vec::new();
    let mut by_path: FnvHashMap<String, usize> = FnvHashMap::default();
    let mut roots: Vec<usize> = Vec::new();

    for entry in entries {
        let segments: Vec<&str> = entry.path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            continue;
        }

        let mut parent: Option<usize> = None;
        let mut prefix = String::new();
        for (depth, segment) in segments.iter().enumerate() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            let is_last = depth + 1 == segments.len();

            let slot = match by_path.get(prefix.as_str()).copied() {
                Some(existing) => existing,
                None => {
                    let is_directory = !is_last || entry.is_directory;
                    slots.push(NodeSlot {
                        name: segment.to_string(),
                        path: prefix.clone(),
                        is_directory,
                        size: if is_directory { 0 } else { entry.uncompressed_size },
                        children: Vec::new(),
                    });
                    let created = slots.len() - 1;
                    by_path.insert(prefix.clone(), created);
                    match parent {
                        Some(parent) => slots[parent].children.push(created),
                        None => roots.push(created),
                    }
                    created
                }
            };

            // A file cannot own children; entries that would need it as a
            // parent are unplaceable in a well-formed tree.
            if !is_last && !slots[slot].is_directory {
                log::warn!(
                    "skipping entry {:?}: prefix {prefix:?} is a file",
                    entry.path
                );
                break;
            }
            parent = Some(slot);
        }
    }

    let mut tree: Vec<FileTreeNode> = roots
        .into_iter()
        .map(|root| realize(&mut slots, root))
        .collect();
    sort_siblings(&mut tree);
    tree
}

/// Converts a slot (and its subtree) into a finished node, sorting each
/// `children` list on the way out.
fn realize(slots: &mut [NodeSlot], index: usize) -> FileTreeNode {
    let child_indices = std::mem::take(&mut slots[index].children);
    let mut children: Vec<FileTreeNode> = child_indices
        .into_iter()
        .map(|child| realize(slots, child))
        .collect();
    sort_siblings(&mut children);

    let slot = &mut slots[index];
    let name = std::mem::take(&mut slot.name);
    let path = std::mem::take(&mut slot.path);
    let kind = if slot.is_directory {
        NodeKind::Directory { children }
    } else {
        NodeKind::File { size: slot.size }
    };
    FileTreeNode { name, path, kind }
}

fn sort_siblings(nodes: &mut [FileTreeNode]) {
    nodes.sort_by(|a, b| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| compare_names(&a.name, &b.name))
    });
}

/// Name ordering within a sibling group: case-insensitive primary,
/// case-sensitive tiebreak. Path identity elsewhere stays fully
/// case-sensitive.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
