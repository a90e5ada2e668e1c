//! Text flattening over mixed tag/text children
//!
//! Everything that becomes plain text in the output funnels through this
//! one contract: descendant text is concatenated in document order, tag
//! identity and attributes are discarded, and newline characters are
//! stripped (newlines inside the source HTML are formatting artifacts, not
//! content).

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use super::dom::{classify, DomNode};

/// Flatten one node into its concatenated descendant text.
///
/// Total over the node grammar: comments and other node kinds contribute
/// the empty string.
pub fn flatten_text(node: NodeRef<'_, Node>) -> String {
    let mut out = String::new();
    collect(node, &mut out);
    out.replace('\n', "")
}

/// Flatten every child of `element` in document order.
///
/// Equivalent in output to flattening the element itself; it only skips
/// the element's own tag wrapper.
pub fn flatten_children(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for child in element.children() {
        collect(child, &mut out);
    }
    out.replace('\n', "")
}

fn collect(node: NodeRef<'_, Node>, out: &mut String) {
    match classify(node) {
        DomNode::Tag(element) => {
            for child in element.children() {
                collect(child, out);
            }
        }
        DomNode::Text(text) => out.push_str(text),
        DomNode::Other => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn flatten_first_div(source: &str) -> String {
        let html = Html::parse_fragment(source);
        let selector = Selector::parse("div").unwrap();
        let div = html.select(&selector).next().unwrap();
        flatten_text(*div)
    }

    #[test]
    fn test_flatten_nested_wrappers() {
        // Wrapper nesting depth must not change the result
        assert_eq!(flatten_first_div("<div>close()</div>"), "close()");
        assert_eq!(
            flatten_first_div("<div><span><code><b>close()</b></code></span></div>"),
            "close()"
        );
    }

    #[test]
    fn test_flatten_concatenates_in_document_order() {
        assert_eq!(
            flatten_first_div("<div>public <span>void</span> close()</div>"),
            "public void close()"
        );
    }

    #[test]
    fn test_flatten_strips_newlines() {
        assert_eq!(
            flatten_first_div("<div>public\n<span>void\nclose()</span>\n</div>"),
            "publicvoidclose()"
        );
    }

    #[test]
    fn test_flatten_ignores_comments() {
        assert_eq!(
            flatten_first_div("<div>a<!-- hidden -->b</div>"),
            "ab"
        );
    }

    #[test]
    fn test_flatten_children_skips_own_wrapper() {
        let html = Html::parse_fragment("<div title=\"x\"><span>a</span>b</div>");
        let selector = Selector::parse("div").unwrap();
        let div = html.select(&selector).next().unwrap();
        assert_eq!(flatten_children(div), "ab");
    }

    #[test]
    fn test_flatten_empty_element() {
        assert_eq!(flatten_first_div("<div></div>"), "");
    }
}
