//! JSON serialization of the page document tree

use crate::page_model::PageNode;

/// Serialize a document tree to pretty-printed AST JSON.
///
/// Field names follow the documentation toolchain's conventions (node
/// `type` tags in lowercase, `emphasize_lines` in snake case).
pub fn to_json(document: &PageNode) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}
