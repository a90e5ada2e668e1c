//! Destination abstraction for extraction output

use super::error::ExtractError;

/// Destination for the dispatcher's semantic events.
///
/// The extraction walk emits the same event stream whether it is rendering
/// markup directly or growing a document tree; implementations decide what
/// each event becomes. The dispatcher only emits code events with
/// non-empty source text.
pub trait DocumentSink {
    /// A heading with its underline depth (0 = most prominent) and its
    /// anchor-derived identifier.
    fn heading(&mut self, text: &str, depth: usize, id: &str) -> Result<(), ExtractError>;

    /// A paragraph of flattened text.
    fn paragraph(&mut self, text: &str);

    /// A standalone reference (hyperlink) with its visible text.
    fn reference(&mut self, text: &str, refuri: &str);

    /// A code block in the given language.
    fn code(&mut self, source: &str, language: &str);

    /// A list-table body produced by the table transducer.
    fn list_table(&mut self, rows: &[Vec<String>]) -> Result<(), ExtractError>;

    /// The page header has been dispatched; content that follows belongs
    /// to the section it opened.
    fn advance_section(&mut self);
}
