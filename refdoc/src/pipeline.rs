//! Three-stage conversion pipeline
//!
//! This module orchestrates the three stages of page conversion:
//! 1. **Load**: fetch the page over HTTP or read it from disk
//! 2. **Extract**: walk the content subtree into a destination sink
//! 3. **Emit**: join the rendered markup, or serialize the document tree

use std::path::PathBuf;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

use crate::ast_exporter;
use crate::extract::{ExtractError, PageExtractor};
use crate::fetch::{FetchError, PageFetcher};
use crate::page_model::AstBuilder;
use crate::rst_exporter::RstWriter;
use crate::template_profile::TemplateProfile;

/// Output form selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Rendered reStructuredText (the production path)
    Rst,
    /// Pretty-printed AST JSON of the document tree
    Ast,
}

/// Where the page HTML comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Fetch over HTTP(S)
    Url(String),
    /// Read from the local filesystem
    File(PathBuf),
}

impl PageSource {
    /// Classify a CLI input: anything that parses as an http(s) URL is
    /// fetched; everything else is read from disk.
    pub fn classify(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                PageSource::Url(input.to_string())
            }
            _ => PageSource::File(PathBuf::from(input)),
        }
    }
}

/// Conversion errors across all stages
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to read {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content selector '{selector}': {detail}")]
    ContentSelector { selector: String, detail: String },

    #[error("no element matches the content selector '{selector}'")]
    MissingContentRoot { selector: String },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("failed to serialize the document tree: {0}")]
    Ast(#[from] serde_json::Error),
}

/// Stage 1: load the page text from its source.
pub async fn load_page(
    source: &PageSource,
    profile: &TemplateProfile,
) -> Result<String, ConvertError> {
    match source {
        PageSource::Url(url) => {
            let fetcher = PageFetcher::new(profile)?;
            Ok(fetcher.fetch(url).await?)
        }
        PageSource::File(path) => {
            log::info!("reading {}", path.display());
            std::fs::read_to_string(path).map_err(|source| ConvertError::Io {
                path: path.clone(),
                source,
            })
        }
    }
}

/// Stages 2 and 3: convert fetched page text into the requested output.
///
/// This is the pure core of the tool: a function from page text to output
/// string, with no I/O past this point.
pub fn convert_html(
    html: &str,
    profile: &TemplateProfile,
    emit: Emit,
) -> Result<String, ConvertError> {
    let document = Html::parse_document(html);
    let content_root = find_content_root(&document, profile)?;
    let extractor = PageExtractor::new(&document, profile);

    match emit {
        Emit::Rst => {
            let mut writer = RstWriter::new(profile.indent_step);
            extractor.extract(content_root, &mut writer)?;
            Ok(writer.finish())
        }
        Emit::Ast => {
            let mut builder = AstBuilder::new();
            extractor.extract(content_root, &mut builder)?;
            Ok(ast_exporter::to_json(&builder.build())?)
        }
    }
}

/// Run all three stages for one page.
pub async fn convert(
    source: &PageSource,
    profile: &TemplateProfile,
    emit: Emit,
) -> Result<String, ConvertError> {
    let html = load_page(source, profile).await?;
    convert_html(&html, profile, emit)
}

fn find_content_root<'a>(
    document: &'a Html,
    profile: &TemplateProfile,
) -> Result<ElementRef<'a>, ConvertError> {
    let selector =
        Selector::parse(&profile.content_selector).map_err(|e| ConvertError::ContentSelector {
            selector: profile.content_selector.clone(),
            detail: e.to_string(),
        })?;

    document
        .select(&selector)
        .next()
        .ok_or_else(|| ConvertError::MissingContentRoot {
            selector: profile.content_selector.clone(),
        })
}
