//! Typed document tree for the tree-variant extraction path
//!
//! The node vocabulary follows the documentation toolchain's AST: a root
//! carrying page-level options, sections grouping a heading with the
//! content that follows it, paragraphs, references, text leaves, and code
//! blocks. Child order is output order.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::extract::{DocumentSink, ExtractError};

/// A node in the page document tree
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageNode {
    /// Top-level container with an open bag of page-level options
    Root {
        options: BTreeMap<String, Value>,
        children: Vec<PageNode>,
    },

    /// Groups one heading with the content that logically follows it
    Section { children: Vec<PageNode> },

    /// A heading with its anchor-derived identifier
    Heading { id: String, children: Vec<PageNode> },

    /// Generic inline-content container
    Paragraph { children: Vec<PageNode> },

    /// A hyperlink; children are the visible content
    Reference {
        refuri: String,
        children: Vec<PageNode>,
    },

    /// A plain text leaf
    Text { value: String },

    /// A code block leaf
    Code {
        lang: String,
        copyable: bool,
        emphasize_lines: Vec<usize>,
        value: String,
        linenos: bool,
    },
}

impl PageNode {
    /// Create an empty root node.
    pub fn root() -> Self {
        PageNode::Root {
            options: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        PageNode::Text {
            value: value.into(),
        }
    }

    /// Create a section wrapping the given children.
    pub fn section(children: Vec<PageNode>) -> Self {
        PageNode::Section { children }
    }

    /// Create a heading holding a single text child.
    pub fn heading(id: impl Into<String>, text: impl Into<String>) -> Self {
        PageNode::Heading {
            id: id.into(),
            children: vec![PageNode::text(text)],
        }
    }

    /// Create a paragraph holding a single text child.
    pub fn paragraph(text: impl Into<String>) -> Self {
        PageNode::Paragraph {
            children: vec![PageNode::text(text)],
        }
    }

    /// Create a reference with its visible text.
    pub fn reference(refuri: impl Into<String>, text: impl Into<String>) -> Self {
        PageNode::Reference {
            refuri: refuri.into(),
            children: vec![PageNode::text(text)],
        }
    }

    /// Create a code leaf with the toolchain defaults: not copyable, no
    /// emphasized lines, no line numbering.
    pub fn code(value: impl Into<String>, lang: impl Into<String>) -> Self {
        PageNode::Code {
            lang: lang.into(),
            copyable: false,
            emphasize_lines: Vec::new(),
            value: value.into(),
            linenos: false,
        }
    }

    /// Whether this node can hold children.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            PageNode::Root { .. }
                | PageNode::Section { .. }
                | PageNode::Heading { .. }
                | PageNode::Paragraph { .. }
                | PageNode::Reference { .. }
        )
    }

    /// Mutable access to this node's children, if it is a container.
    pub fn children_mut(&mut self) -> Option<&mut Vec<PageNode>> {
        match self {
            PageNode::Root { children, .. }
            | PageNode::Section { children }
            | PageNode::Heading { children, .. }
            | PageNode::Paragraph { children }
            | PageNode::Reference { children, .. } => Some(children),
            PageNode::Text { .. } | PageNode::Code { .. } => None,
        }
    }

    /// Concatenated text of this node's text descendants, in order.
    pub fn plain_text(&self) -> String {
        match self {
            PageNode::Text { value } => value.clone(),
            PageNode::Code { value, .. } => value.clone(),
            PageNode::Root { children, .. }
            | PageNode::Section { children }
            | PageNode::Heading { children, .. }
            | PageNode::Paragraph { children }
            | PageNode::Reference { children, .. } => {
                children.iter().map(PageNode::plain_text).collect()
            }
        }
    }
}

/// Tree-variant destination: grows a `PageNode` tree from dispatch events.
///
/// Everything after the page header must nest under the header's first
/// heading as one section. The builder implements that by moving the last
/// root child aside when the header has been dispatched and appending all
/// later content into it.
#[derive(Debug, Default)]
pub struct AstBuilder {
    options: BTreeMap<String, Value>,
    children: Vec<PageNode>,
    /// The section the page header opened, if any
    lead: Option<PageNode>,
}

impl AstBuilder {
    /// Create a builder with an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the builder and return the finished tree.
    pub fn build(mut self) -> PageNode {
        if let Some(lead) = self.lead.take() {
            self.children.push(lead);
        }
        PageNode::Root {
            options: self.options,
            children: self.children,
        }
    }

    fn push(&mut self, node: PageNode) {
        match self.lead.as_mut().and_then(PageNode::children_mut) {
            Some(children) => children.push(node),
            None => self.children.push(node),
        }
    }
}

impl DocumentSink for AstBuilder {
    fn heading(&mut self, text: &str, depth: usize, id: &str) -> Result<(), ExtractError> {
        let heading = PageNode::heading(id, text);
        if depth == 0 {
            self.push(PageNode::section(vec![heading]));
        } else {
            self.push(heading);
        }
        Ok(())
    }

    fn paragraph(&mut self, text: &str) {
        self.push(PageNode::paragraph(text));
    }

    fn reference(&mut self, text: &str, refuri: &str) {
        self.push(PageNode::Paragraph {
            children: vec![PageNode::reference(refuri, text)],
        });
    }

    fn code(&mut self, source: &str, language: &str) {
        if source.is_empty() {
            return;
        }
        self.push(PageNode::code(source, language));
    }

    fn list_table(&mut self, rows: &[Vec<String>]) -> Result<(), ExtractError> {
        // The node vocabulary has no table variant; the summary table only
        // exists on the direct-render path.
        log::warn!(
            "summary table with {} rows has no tree representation; skipped",
            rows.len()
        );
        Ok(())
    }

    fn advance_section(&mut self) {
        if self.lead.is_some() {
            return;
        }
        if self.children.last().is_some_and(PageNode::is_container) {
            self.lead = self.children.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_content_nests_under_lead_section() {
        let mut builder = AstBuilder::new();
        builder.heading("Widget", 0, "widget").unwrap();
        builder.advance_section();
        builder.paragraph("Hello");

        let root = builder.build();
        let PageNode::Root { children, .. } = &root else {
            panic!("expected root");
        };
        assert_eq!(children.len(), 1);

        let PageNode::Section {
            children: section_children,
        } = &children[0]
        else {
            panic!("expected section");
        };
        assert_eq!(section_children.len(), 2);
        assert!(matches!(&section_children[0], PageNode::Heading { id, .. } if id == "widget"));
        assert!(matches!(&section_children[1], PageNode::Paragraph { .. }));
    }

    #[test]
    fn test_advance_without_container_keeps_root_head() {
        let mut builder = AstBuilder::new();
        builder.code("int x;", "java");
        builder.advance_section();
        builder.paragraph("after");

        let root = builder.build();
        let PageNode::Root { children, .. } = &root else {
            panic!("expected root");
        };
        // Code is not a container, so both nodes stay root-level siblings
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_empty_code_is_never_appended() {
        let mut builder = AstBuilder::new();
        builder.code("", "java");

        let root = builder.build();
        let PageNode::Root { children, .. } = &root else {
            panic!("expected root");
        };
        assert!(children.is_empty());
    }

    #[test]
    fn test_subheading_appends_bare_heading() {
        let mut builder = AstBuilder::new();
        builder.heading("Widget", 0, "widget").unwrap();
        builder.advance_section();
        builder.heading("Method Summary", 1, "method-summary").unwrap();

        let root = builder.build();
        let section = root.plain_text();
        assert_eq!(section, "WidgetMethod Summary");
    }

    #[test]
    fn test_plain_text_concatenates_descendants() {
        let node = PageNode::Paragraph {
            children: vec![
                PageNode::text("see "),
                PageNode::reference("Beta.html", "Beta"),
            ],
        };
        assert_eq!(node.plain_text(), "see Beta");
    }
}
