//! Static lookup tables for the viewer.
//!
//! Both maps are plain finite string-to-enum mappings over the file name;
//! no dynamic dispatch, no registration.

use archive::FileTreeNode;
use serde::Serialize;

/// Syntax mode the embedded editor widget should use for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    PlainText,
    C,
    Cpp,
    CSharp,
    Css,
    Go,
    Groovy,
    Html,
    Java,
    JavaScript,
    Json,
    Kotlin,
    Markdown,
    Properties,
    Python,
    Ruby,
    Rust,
    Scala,
    Shell,
    Sql,
    Toml,
    TypeScript,
    Xml,
    Yaml,
}

/// Icon category for a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIcon {
    Directory,
    Code,
    Text,
    Config,
    Image,
    Archive,
    Binary,
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase())
}

/// Maps a file name to the editor language.
pub fn language_for_name(name: &str) -> Language {
    match extension_of(name) {
        Some(extension) => language_for_extension(&extension),
        None => Language::PlainText,
    }
}

fn language_for_extension(extension: &str) -> Language {
    match extension {
        "c" | "h" => Language::C,
        "cc" | "cpp" | "hpp" => Language::Cpp,
        "cs" => Language::CSharp,
        "css" | "scss" | "less" => Language::Css,
        "go" => Language::Go,
        "groovy" | "gradle" => Language::Groovy,
        "html" | "htm" | "xhtml" => Language::Html,
        "java" => Language::Java,
        "js" | "jsx" => Language::JavaScript,
        "json" => Language::Json,
        "kt" | "kts" => Language::Kotlin,
        "md" | "markdown" => Language::Markdown,
        "properties" | "ini" | "cfg" | "conf" | "env" => Language::Properties,
        "py" => Language::Python,
        "rb" => Language::Ruby,
        "rs" => Language::Rust,
        "scala" => Language::Scala,
        "sh" | "bash" => Language::Shell,
        "sql" => Language::Sql,
        "toml" => Language::Toml,
        "ts" | "tsx" => Language::TypeScript,
        "xml" | "xsd" | "xsl" | "pom" => Language::Xml,
        "yaml" | "yml" => Language::Yaml,
        _ => Language::PlainText,
    }
}

/// Maps a tree node to its icon category.
pub fn icon_for_node(node: &FileTreeNode) -> FileIcon {
    if node.is_directory() {
        return FileIcon::Directory;
    }
    let Some(extension) = extension_of(&node.name) else {
        return FileIcon::Text;
    };
    match extension.as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "ico" | "webp" | "svg" => FileIcon::Image,
        "zip" | "jar" | "war" | "ear" | "tar" | "gz" | "7z" => FileIcon::Archive,
        "json" | "yaml" | "yml" | "toml" | "ini" | "cfg" | "conf" | "properties" | "env"
        | "gradle" | "pom" | "mf" | "manifest" => FileIcon::Config,
        "md" | "markdown" | "txt" | "log" | "rst" | "adoc" | "csv" | "tsv" => FileIcon::Text,
        "class" | "so" | "dll" | "dylib" | "exe" | "bin" => FileIcon::Binary,
        extension if language_for_extension(extension) != Language::PlainText => FileIcon::Code,
        _ => FileIcon::Binary,
    }
}
