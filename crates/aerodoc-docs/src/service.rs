//! DocumentService
//!
//! Explicitly constructed handle bundling the converter with the resolve →
//! convert pipeline. The boundary contract is the same as the weather
//! handlers: always a string, with failures rendered as
//! `Error reading <TYPE>: <message>`.

use crate::convert::{ConvertError, DefaultConverter, MarkdownConverter};
use crate::resolver::{self, ResolveError};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Label used in error messages; the conversion itself is format-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
        }
    }
}

#[derive(Debug, Error)]
enum ReadError {
    #[error("{0}")]
    Resolve(#[from] ResolveError),
    #[error("{0}")]
    Convert(#[from] ConvertError),
    #[error("conversion task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub struct DocumentService {
    converter: Arc<dyn MarkdownConverter>,
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentService {
    pub fn new() -> Self {
        Self::with_converter(Arc::new(DefaultConverter))
    }

    pub fn with_converter(converter: Arc<dyn MarkdownConverter>) -> Self {
        Self { converter }
    }

    /// Read a document from a local path or public URI and return its text
    /// content; empty content reads as an empty string.
    pub async fn read_document(&self, kind: DocumentKind, file_path: &str) -> String {
        match self.read_inner(file_path).await {
            Ok(text) => text,
            Err(err) => {
                debug!(kind = kind.label(), %err, "document read failed");
                format!("Error reading {}: {}", kind.label(), err)
            }
        }
    }

    async fn read_inner(&self, file_path: &str) -> Result<String, ReadError> {
        let resolved = resolver::resolve(file_path).await?;

        // Parsing is CPU-bound; keep it off the async workers.
        let converter = self.converter.clone();
        let path = resolved.path().to_path_buf();
        let document = tokio::task::spawn_blocking(move || converter.convert(&path)).await??;

        // A downloaded temp file is removed here, after the conversion.
        drop(resolved);

        Ok(document.text_content.unwrap_or_default())
    }
}
