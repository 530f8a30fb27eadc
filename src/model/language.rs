//! Language identification
//!
//! Maps file extensions to the language ids used as rule scopes in the
//! configuration (`rust`, `cpp`, `python`, ...).

use std::path::Path;

/// Language id for documents with no recognised extension
pub const PLAIN_TEXT: &str = "plaintext";

/// Detect language id from a file extension
pub fn language_from_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "rs" => "rust",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" => "cpp",
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "mts" | "cts" => "typescript",
        "go" => "go",
        "java" => "java",
        "php" => "php",
        "sh" | "bash" => "shellscript",
        "md" | "markdown" => "markdown",
        "yaml" | "yml" => "yaml",
        "json" => "json",
        "toml" => "toml",
        "html" | "htm" => "html",
        "css" => "css",
        _ => PLAIN_TEXT,
    }
}

/// Detect language id from a file path
pub fn language_from_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(language_from_extension)
        .unwrap_or(PLAIN_TEXT)
}
