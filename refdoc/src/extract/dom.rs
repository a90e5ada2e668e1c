//! Closed classification of DOM nodes
//!
//! The extraction pass only distinguishes elements, text, and "everything
//! else". Every node the parser can produce must map to one of the three
//! kinds here; the match below is exhaustive over the parser's grammar.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

/// A DOM node narrowed to the kinds extraction distinguishes
#[derive(Debug, Clone, Copy)]
pub enum DomNode<'a> {
    /// An element node
    Tag(ElementRef<'a>),
    /// A text node's character data
    Text(&'a str),
    /// Comment, doctype, processing instruction, or document wrapper
    Other,
}

/// Classify a raw tree node into the extraction vocabulary.
pub fn classify(node: NodeRef<'_, Node>) -> DomNode<'_> {
    match node.value() {
        Node::Element(_) => ElementRef::wrap(node).map_or(DomNode::Other, DomNode::Tag),
        Node::Text(text) => DomNode::Text(&**text),
        Node::Document
        | Node::Fragment
        | Node::Doctype(_)
        | Node::Comment(_)
        | Node::ProcessingInstruction(_) => DomNode::Other,
    }
}

/// Element children of an element, in document order.
///
/// Text and other node kinds between the elements are dropped; the
/// documentation template scatters whitespace text nodes between
/// structural children.
pub fn tag_children(element: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// The first child node of any kind, classified.
pub fn first_child(element: ElementRef<'_>) -> Option<DomNode<'_>> {
    element.children().next().map(classify)
}
