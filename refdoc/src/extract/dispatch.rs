//! Class-driven recursive dispatch over the content subtree
//!
//! Each element is routed by its semantic `class` attribute, falling back
//! to heading tag names. Unrecognized containers are walked transparently
//! so structure-only wrapper elements never block traversal.

use scraper::{ElementRef, Html, Selector};

use crate::template_profile::TemplateProfile;

use super::dom::{first_child, tag_children, DomNode};
use super::error::{ExtractError, MAX_DISPATCH_DEPTH};
use super::sink::DocumentSink;
use super::table::list_table_rows;
use super::text::{flatten_children, flatten_text};

/// Walks a page's content subtree and emits semantic events into a sink.
pub struct PageExtractor<'a> {
    /// The full parsed page, needed to resolve the summary table by
    /// selector from its container's id
    document: &'a Html,
    /// Template-family configuration
    profile: &'a TemplateProfile,
}

impl<'a> PageExtractor<'a> {
    /// Create an extractor over one parsed page.
    pub fn new(document: &'a Html, profile: &'a TemplateProfile) -> Self {
        Self { document, profile }
    }

    /// Walk the top-level children of the content root.
    ///
    /// A top-level child classed exactly `header` is special-cased: its
    /// children are dispatched first and the sink is then advanced into
    /// the section the header opened, so everything that follows nests
    /// under the page's first heading instead of as siblings of the root.
    pub fn extract<S: DocumentSink>(
        &self,
        content_root: ElementRef<'_>,
        sink: &mut S,
    ) -> Result<(), ExtractError> {
        for element in tag_children(content_root) {
            if element.value().attr("class") == Some("header") {
                for child in tag_children(element) {
                    self.dispatch(child, sink, 1)?;
                }
                sink.advance_section();
            } else {
                self.dispatch(element, sink, 1)?;
            }
        }
        Ok(())
    }

    /// Route one element by class, then by heading tag name, then fall
    /// through to the transparent default that recurses into tag children.
    fn dispatch<S: DocumentSink>(
        &self,
        element: ElementRef<'_>,
        sink: &mut S,
        depth: usize,
    ) -> Result<(), ExtractError> {
        if depth > MAX_DISPATCH_DEPTH {
            return Err(ExtractError::DepthLimitExceeded {
                limit: MAX_DISPATCH_DEPTH,
            });
        }

        match element.value().attr("class").unwrap_or("") {
            "title" => self.handle_heading(element, 0, sink),
            "type-signature" => self.handle_type_signature(element, sink),
            "block" => {
                sink.paragraph(&flatten_text(*element));
                Ok(())
            }
            "method-summary" => self.handle_method_summary(element, sink),
            "member-signature" => {
                let code = flatten_children(element);
                if !code.is_empty() {
                    sink.code(&code, &self.profile.code_language);
                }
                Ok(())
            }
            "notes" => {
                for child in tag_children(element) {
                    self.dispatch(child, sink, depth + 1)?;
                }
                Ok(())
            }
            _ => match heading_depth(element.value().name()) {
                Some(tag_depth) => self.handle_heading(element, tag_depth, sink),
                None => {
                    for child in tag_children(element) {
                        self.dispatch(child, sink, depth + 1)?;
                    }
                    Ok(())
                }
            },
        }
    }

    /// Emit one heading.
    ///
    /// The page title carries its text in the `title` attribute; headings
    /// without one fall back to their flattened element content.
    fn handle_heading<S: DocumentSink>(
        &self,
        element: ElementRef<'_>,
        depth: usize,
        sink: &mut S,
    ) -> Result<(), ExtractError> {
        let text = match element.value().attr("title") {
            Some(title) => title.to_string(),
            None => flatten_text(*element),
        };
        sink.heading(&text, depth, &heading_id(element, &text))
    }

    /// A method-summary section holds exactly one heading and one table
    /// container; anything else means the page template changed and the
    /// run must fail rather than emit mis-structured output.
    fn handle_method_summary<S: DocumentSink>(
        &self,
        section: ElementRef<'_>,
        sink: &mut S,
    ) -> Result<(), ExtractError> {
        let children = tag_children(section);
        if children.len() != 2 {
            return Err(ExtractError::StructureMismatch {
                section: "method-summary".to_string(),
                detail: format!("expected 2 children, found {}", children.len()),
            });
        }

        let heading = children[0];
        let container = children[1];

        let Some(depth) = heading_depth(heading.value().name()) else {
            return Err(ExtractError::StructureMismatch {
                section: "method-summary".to_string(),
                detail: format!(
                    "expected a heading element first, found <{}>",
                    heading.value().name()
                ),
            });
        };
        self.handle_heading(heading, depth, sink)?;

        let Some(container_id) = container.value().attr("id") else {
            return Err(ExtractError::StructureMismatch {
                section: "method-summary".to_string(),
                detail: "summary table container has no id attribute".to_string(),
            });
        };

        let selector_source = format!(
            "#{} {}",
            container_id, self.profile.summary_table_selector
        );
        let selector =
            Selector::parse(&selector_source).map_err(|e| ExtractError::InvalidSelector {
                selector: selector_source.clone(),
                detail: e.to_string(),
            })?;

        let Some(table) = self.document.select(&selector).next() else {
            return Err(ExtractError::StructureMismatch {
                section: "method-summary".to_string(),
                detail: format!("no element matches '{}'", selector_source),
            });
        };

        let rows = list_table_rows(table, self.profile.summary_columns)?;
        sink.list_table(&rows)
    }

    /// Annotations precede the declaration; every other span in the
    /// signature concatenates into one code block, emitted last.
    fn handle_type_signature<S: DocumentSink>(
        &self,
        element: ElementRef<'_>,
        sink: &mut S,
    ) -> Result<(), ExtractError> {
        let mut code = String::new();
        for child in tag_children(element) {
            if child.value().attr("class") == Some("annotations") {
                self.handle_annotation(child, sink);
            } else if child.value().name() == "span" {
                code.push_str(&flatten_text(*child));
            }
        }

        if !code.is_empty() {
            sink.code(&code, &self.profile.code_language);
        }
        Ok(())
    }

    /// Not every annotation carries a link; those whose first child is not
    /// an anchor are skipped.
    fn handle_annotation<S: DocumentSink>(&self, annotation: ElementRef<'_>, sink: &mut S) {
        let Some(DomNode::Tag(link)) = first_child(annotation) else {
            return;
        };
        if link.value().name() != "a" {
            return;
        }
        let Some(refuri) = link.value().attr("href") else {
            log::debug!("annotation anchor without href skipped");
            return;
        };
        sink.reference(&flatten_children(link), refuri);
    }
}

/// Numeric underline depth for `h1`..`h6` tag names.
fn heading_depth(tag: &str) -> Option<usize> {
    match tag {
        "h1" => Some(0),
        "h2" => Some(1),
        "h3" => Some(2),
        "h4" => Some(3),
        "h5" => Some(4),
        "h6" => Some(5),
        _ => None,
    }
}

/// Anchor-derived heading identifier: the element's own id when present,
/// otherwise a slug of the heading text.
fn heading_id(element: ElementRef<'_>, text: &str) -> String {
    match element.value().attr("id") {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => slugify(text),
    }
}

fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}
