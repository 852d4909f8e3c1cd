//! File tree materialization.
//!
//! The materializer turns an archive's flat entry list into an ordered
//! tree of [`FileTreeNode`]s:
//! - Intermediate directories implied by entry paths are created exactly once
//! - Every `children` list sorts directories before files, then by name
//! - The tree is a pure function of the entry list (re-materializing the
//!   same archive produces the same tree)

mod materialize;
mod node;

pub use materialize::materialize;
pub use node::{find_node, iter_preorder, FileTreeNode, NodeKind, PreorderIter};
