//! Searchable-file selection.

use crate::tree::{iter_preorder, FileTreeNode};

/// Extensions treated as text/code/config content.
///
/// JVM-flavored formats are listed alongside the common web and config
/// formats because the archives being explored are ZIPs and JARs.
pub const SEARCHABLE_EXTENSIONS: &[&str] = &[
    // Code
    "java", "kt", "kts", "scala", "groovy", "clj", "rs", "go", "c", "h", "cc", "cpp", "hpp",
    "cs", "py", "rb", "php", "swift", "js", "jsx", "ts", "tsx", "vue", "dart", "lua", "sh",
    "bash", "bat", "cmd", "ps1", "sql", "r", "pl",
    // Markup and styles
    "html", "htm", "xhtml", "xml", "xsl", "xsd", "svg", "css", "scss", "less", "md",
    "markdown", "rst", "adoc", "tex",
    // Config and data
    "json", "yaml", "yml", "toml", "ini", "cfg", "conf", "properties", "env", "gradle",
    "pom", "mf", "manifest", "txt", "csv", "tsv", "log", "lock", "gitignore", "editorconfig",
];

/// File names searchable regardless of extension (matched case-insensitively
/// anywhere in the name).
const SEARCHABLE_NAME_STEMS: &[&str] = &["readme", "license", "changelog"];

/// Whether a file name marks likely-text content eligible for search.
pub fn is_searchable_file(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    if SEARCHABLE_NAME_STEMS.iter().any(|stem| lower.contains(stem)) {
        return true;
    }
    match lower.rsplit_once('.') {
        Some((_, extension)) => SEARCHABLE_EXTENSIONS.contains(&extension),
        None => false,
    }
}

/// The set of searchable file paths for one tree, in pre-order.
///
/// Computed once per tree and reused across queries; the scan order here
/// is the order results are emitted in. Directories are never searchable.
#[derive(Debug, Default)]
pub struct SearchIndex {
    targets: Vec<String>,
}

impl SearchIndex {
    pub fn build(roots: &[FileTreeNode]) -> Self {
        let targets = iter_preorder(roots)
            .filter(|node| !node.is_directory() && is_searchable_file(&node.name))
            .map(|node| node.path.clone())
            .collect();
        Self { targets }
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
