//! Document conversion
//!
//! `MarkdownConverter` is the seam between the tools and the actual parsing
//! libraries; the default implementation is format-agnostic and picks the
//! parser from the file's content magic, falling back to the extension.
//! PDF text comes from `pdf-extract`; DOCX text is pulled from the `w:t`
//! runs of `word/document.xml` inside the zip archive.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("could not open document: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported document format")]
    UnsupportedFormat,
    #[error("pdf extraction failed: {0}")]
    Pdf(String),
    #[error("docx archive invalid: {0}")]
    DocxArchive(#[from] zip::result::ZipError),
    #[error("docx body malformed: {0}")]
    DocxXml(#[from] quick_xml::Error),
    #[error("docx has no document body")]
    DocxMissingBody,
}

/// Conversion result. `text_content` is `None` when the document yielded no
/// text at all; callers render that as an empty string.
#[derive(Debug)]
pub struct Document {
    pub text_content: Option<String>,
}

pub trait MarkdownConverter: Send + Sync {
    fn convert(&self, path: &Path) -> Result<Document, ConvertError>;
}

/// Format-agnostic converter used in production.
pub struct DefaultConverter;

impl MarkdownConverter for DefaultConverter {
    fn convert(&self, path: &Path) -> Result<Document, ConvertError> {
        match detect_format(path)? {
            DocumentFormat::Pdf => convert_pdf(path),
            DocumentFormat::Docx => convert_docx(path),
        }
    }
}

enum DocumentFormat {
    Pdf,
    Docx,
}

fn detect_format(path: &Path) -> Result<DocumentFormat, ConvertError> {
    let mut magic = [0u8; 4];
    let mut file = fs::File::open(path)?;
    let read = file.read(&mut magic)?;

    if read >= 4 && &magic == b"%PDF" {
        return Ok(DocumentFormat::Pdf);
    }
    // DOCX is a zip archive.
    if read >= 2 && magic.starts_with(b"PK") {
        return Ok(DocumentFormat::Docx);
    }

    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("pdf") => Ok(DocumentFormat::Pdf),
        Some("docx") => Ok(DocumentFormat::Docx),
        _ => Err(ConvertError::UnsupportedFormat),
    }
}

fn convert_pdf(path: &Path) -> Result<Document, ConvertError> {
    let text = pdf_extract::extract_text(path).map_err(|e| ConvertError::Pdf(e.to_string()))?;
    Ok(document_from_text(text))
}

fn convert_docx(path: &Path) -> Result<Document, ConvertError> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let mut body_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| ConvertError::DocxMissingBody)?
        .read_to_string(&mut body_xml)?;

    let text = document_xml_to_text(&body_xml)?;
    Ok(document_from_text(text))
}

fn document_from_text(text: String) -> Document {
    let trimmed = text.trim().to_string();
    Document {
        text_content: (!trimmed.is_empty()).then_some(trimmed),
    }
}

/// Flatten WordprocessingML to plain text: `w:t` runs carry the text,
/// `w:p` ends a paragraph, `w:br`/`w:tab` are soft breaks.
fn document_xml_to_text(xml: &str) -> Result<String, ConvertError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => out.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"br" => out.push('\n'),
                b"tab" => out.push('\t'),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                let text = t.unescape().map_err(|e| ConvertError::DocxXml(e.into()))?;
                out.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}
