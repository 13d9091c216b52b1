//! aerodoc-docs: document-to-markdown tools
//!
//! Reads PDF and DOCX documents from local paths or public URIs and returns
//! their text content in markdown-friendly plain text. Remote inputs are
//! downloaded to a temporary file that lives exactly as long as the
//! conversion call. Any failure anywhere in resolution or conversion is
//! rendered as `Error reading <TYPE>: <message>` - handlers never propagate.

pub mod convert;
pub mod prompts;
pub mod resolver;
pub mod service;
pub mod tools;

pub use convert::{ConvertError, DefaultConverter, Document, MarkdownConverter};
pub use service::{DocumentKind, DocumentService};
