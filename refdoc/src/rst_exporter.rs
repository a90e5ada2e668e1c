//! reStructuredText rendering
//!
//! The writer keeps an ordered, append-only buffer of (indent, text)
//! fragments plus an indentation counter. The indentation active when a
//! fragment is appended is baked into that fragment at render time; later
//! indentation changes never retroactively affect it.

use itertools::Itertools;

use crate::extract::{DocumentSink, ExtractError};
use crate::page_model::PageNode;
use crate::template_profile::TemplateProfile;

/// Underline characters by heading depth, most prominent first.
pub const HEADING_UNDERLINES: [char; 6] = ['=', '-', '~', '^', '`', '#'];

/// Extra indentation for continuation cells inside a list-table row.
const LIST_TABLE_CELL_INDENT: usize = 2;

/// One rendered fragment: literal text and the indentation level that was
/// active when it was appended.
#[derive(Debug, Clone)]
struct Fragment {
    indent: usize,
    text: String,
}

/// Buffered, indentation-aware writer for the output markup.
#[derive(Debug)]
pub struct RstWriter {
    fragments: Vec<Fragment>,
    indentation_level: usize,
    step: usize,
}

impl RstWriter {
    /// Create an empty writer with the given indentation step.
    pub fn new(step: usize) -> Self {
        Self {
            fragments: Vec::new(),
            indentation_level: 0,
            step,
        }
    }

    /// Append literal text at the current indentation level.
    pub fn add(&mut self, text: &str) {
        self.fragments.push(Fragment {
            indent: self.indentation_level,
            text: text.to_string(),
        });
    }

    /// Append a forced line break.
    pub fn add_newline(&mut self) {
        self.add("\n");
    }

    /// Append a blank-line separator.
    pub fn add_blank_line(&mut self) {
        self.add("\n\n");
    }

    /// Append a heading and its underline.
    ///
    /// The underline repeats the depth's character once per character of
    /// heading text.
    pub fn add_heading(&mut self, text: &str, depth: usize) -> Result<(), ExtractError> {
        let Some(underline) = HEADING_UNDERLINES.get(depth) else {
            return Err(ExtractError::UnsupportedHeadingDepth { depth });
        };
        self.add(text);
        self.add_newline();
        self.add(&underline.to_string().repeat(text.chars().count()));
        self.add_blank_line();
        Ok(())
    }

    /// Append a code directive. The language defaults to `none`.
    pub fn add_code_block(&mut self, source: &str, language: Option<&str>, copyable: bool) {
        self.add_code_directive(source, language.unwrap_or("none"), copyable, &[], false);
    }

    /// Append an external reference followed by a blank-line separator.
    pub fn add_reference(&mut self, text: &str, refuri: &str) {
        self.add(&format!("`{} <{}>`__", text, refuri));
        self.add_blank_line();
    }

    /// Append a list-table directive from transduced rows.
    ///
    /// The first cell of each row opens it with `* -` at the directive's
    /// body indentation; the remaining cells continue it with `-` one cell
    /// step deeper; a line break terminates each row.
    pub fn add_list_table(&mut self, rows: &[Vec<String>]) {
        self.add(".. list-table::");
        self.indented(self.step, |writer| {
            writer.add_newline();
            writer.add(":header-rows: 1\n\n");
            for row in rows {
                for (index, cell) in row.iter().enumerate() {
                    if index == 0 {
                        writer.add_newline();
                        writer.add(&format!("* - {}", cell));
                    } else {
                        writer.indented(LIST_TABLE_CELL_INDENT, |writer| {
                            writer.add_newline();
                            writer.add(&format!("- {}", cell));
                        });
                    }
                }
                writer.add_newline();
            }
        });
        self.add_newline();
    }

    /// Increase the indentation applied to subsequently appended fragments.
    pub fn indent(&mut self, spaces: usize) {
        self.indentation_level += spaces;
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self, spaces: usize) {
        self.indentation_level = self.indentation_level.saturating_sub(spaces);
    }

    /// Run `f` with the indentation increased by `spaces`, restoring the
    /// previous level on every exit path.
    pub fn indented<T>(&mut self, spaces: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.indent(spaces);
        let result = f(self);
        self.dedent(spaces);
        result
    }

    /// Join the buffer into the final rendered string.
    ///
    /// Every newline inside a fragment becomes a newline followed by that
    /// fragment's captured indentation.
    pub fn finish(self) -> String {
        let mut output = String::new();
        for fragment in &self.fragments {
            if fragment.indent == 0 {
                output.push_str(&fragment.text);
            } else {
                let indented_newline = format!("\n{}", " ".repeat(fragment.indent));
                output.push_str(&fragment.text.replace('\n', &indented_newline));
            }
        }
        output
    }

    fn add_code_directive(
        &mut self,
        source: &str,
        language: &str,
        copyable: bool,
        emphasize_lines: &[usize],
        linenos: bool,
    ) {
        self.add(&format!(".. code:: {}", language));
        self.indented(self.step, |writer| {
            if copyable {
                writer.add_newline();
                writer.add(":copyable: true");
            }
            if !emphasize_lines.is_empty() {
                writer.add_newline();
                writer.add(&format!(
                    ":emphasize-lines: {}",
                    emphasize_lines.iter().map(ToString::to_string).join(", ")
                ));
            }
            if linenos {
                writer.add_newline();
                writer.add(":linenos:");
            }
        });
        self.add_newline();
        self.indented(self.step, |writer| {
            writer.add_newline();
            writer.add(source);
        });
        self.add_blank_line();
    }
}

impl DocumentSink for RstWriter {
    fn heading(&mut self, text: &str, depth: usize, _id: &str) -> Result<(), ExtractError> {
        self.add_heading(text, depth)
    }

    fn paragraph(&mut self, text: &str) {
        self.add(text);
        self.add_blank_line();
    }

    fn reference(&mut self, text: &str, refuri: &str) {
        self.add_reference(text, refuri);
    }

    fn code(&mut self, source: &str, language: &str) {
        self.add_code_block(source, Some(language), false);
    }

    fn list_table(&mut self, rows: &[Vec<String>]) -> Result<(), ExtractError> {
        self.add_list_table(rows);
        Ok(())
    }

    fn advance_section(&mut self) {}
}

/// Render a document tree through the writer.
///
/// Heading depth follows section nesting: headings in the root's sections
/// underline at depth 0, those in nested sections one level deeper.
pub fn render_document(
    document: &PageNode,
    profile: &TemplateProfile,
) -> Result<String, ExtractError> {
    let mut writer = RstWriter::new(profile.indent_step);
    render_node(document, 0, &mut writer)?;
    Ok(writer.finish())
}

fn render_node(
    node: &PageNode,
    depth: usize,
    writer: &mut RstWriter,
) -> Result<(), ExtractError> {
    match node {
        PageNode::Root { children, .. } => {
            for child in children {
                render_node(child, depth, writer)?;
            }
            Ok(())
        }
        PageNode::Section { children } => {
            for child in children {
                match child {
                    PageNode::Section { .. } => render_node(child, depth + 1, writer)?,
                    _ => render_node(child, depth, writer)?,
                }
            }
            Ok(())
        }
        PageNode::Heading { children, .. } => {
            writer.add_heading(&inline_text(children), depth)
        }
        PageNode::Paragraph { children } => {
            for child in children {
                match child {
                    PageNode::Reference { refuri, children } => {
                        writer.add(&format!("`{} <{}>`__", inline_text(children), refuri));
                    }
                    other => writer.add(&other.plain_text()),
                }
            }
            writer.add_blank_line();
            Ok(())
        }
        PageNode::Reference { refuri, children } => {
            writer.add_reference(&inline_text(children), refuri);
            Ok(())
        }
        PageNode::Text { value } => {
            writer.add(value);
            Ok(())
        }
        PageNode::Code {
            lang,
            copyable,
            emphasize_lines,
            value,
            linenos,
        } => {
            if !value.is_empty() {
                writer.add_code_directive(value, lang, *copyable, emphasize_lines, *linenos);
            }
            Ok(())
        }
    }
}

fn inline_text(children: &[PageNode]) -> String {
    children.iter().map(PageNode::plain_text).collect()
}
