//! Basic text extractor
//!
//! | Type | Extraction |
//! |------|------------|
//! | text | UTF-8 decode |
//! | json | parse, then pretty-print |
//! | html | visible text nodes, trimmed, one per line (`script`/`style` dropped) |
//! | pdf  | not supported; reported as an ingestion error |

use qag_domain::entities::SourceDocument;
use qag_domain::error::{Error, Result};
use qag_domain::ports::providers::TextExtractor;
use qag_domain::value_objects::DocumentType;
use scraper::{Html, Node};

/// Elements whose text is never visible
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Extractor for text, JSON and HTML uploads
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTextExtractor;

impl BasicTextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

fn decode_utf8<'a>(source: &str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|e| Error::ingestion(source, format!("content is not valid UTF-8: {e}")))
}

fn visible_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let mut lines = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|e| INVISIBLE_ELEMENTS.contains(&e.name()))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed);
        }
    }
    lines.join("\n")
}

impl TextExtractor for BasicTextExtractor {
    fn extract(&self, source: &str, bytes: &[u8], doc_type: DocumentType) -> Result<SourceDocument> {
        let text = match doc_type {
            DocumentType::Text => decode_utf8(source, bytes)?.to_string(),
            DocumentType::Json => {
                let value: serde_json::Value = serde_json::from_slice(bytes)
                    .map_err(|e| Error::ingestion(source, format!("invalid JSON: {e}")))?;
                serde_json::to_string_pretty(&value)?
            }
            DocumentType::Html => visible_text(decode_utf8(source, bytes)?),
            DocumentType::Pdf => {
                return Err(Error::ingestion(
                    source,
                    "PDF extraction is not built in; upload the extracted text instead",
                ));
            }
        };
        Ok(SourceDocument::new(source, text, doc_type))
    }
}
