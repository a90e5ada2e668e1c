//! HTML-to-document extraction
//!
//! This module walks the content subtree of one API reference page:
//! elements are routed by their semantic class, mixed tag/text children are
//! flattened into plain strings, and the method summary table is transduced
//! into list-table rows. All output goes through a destination sink, which
//! is either the markup writer (production path) or the document tree
//! builder.

// Submodules
mod dispatch;
mod dom;
mod error;
mod sink;
mod table;
mod text;

// Re-export public types
pub use dispatch::PageExtractor;
pub use dom::{classify, first_child, tag_children, DomNode};
pub use error::{ExtractError, MAX_DISPATCH_DEPTH};
pub use sink::DocumentSink;
pub use table::list_table_rows;
pub use text::{flatten_children, flatten_text};
