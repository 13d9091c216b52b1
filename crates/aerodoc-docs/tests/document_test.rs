//! DocumentService and resolver behavior

use aerodoc_docs::convert::{ConvertError, Document, MarkdownConverter};
use aerodoc_docs::resolver::{self, ResolvedInput};
use aerodoc_docs::service::{DocumentKind, DocumentService};
use axum::routing::get;
use axum::Router;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

struct FailingConverter;

impl MarkdownConverter for FailingConverter {
    fn convert(&self, _path: &Path) -> Result<Document, ConvertError> {
        Err(ConvertError::Pdf("corrupt xref table".to_string()))
    }
}

struct EmptyConverter;

impl MarkdownConverter for EmptyConverter {
    fn convert(&self, _path: &Path) -> Result<Document, ConvertError> {
        Ok(Document { text_content: None })
    }
}

#[tokio::test]
async fn read_pdf_renders_conversion_failure() {
    let service = DocumentService::with_converter(Arc::new(FailingConverter));
    let result = service
        .read_document(DocumentKind::Pdf, "/tmp/broken.pdf")
        .await;

    assert!(result.starts_with("Error reading PDF: "));
    assert!(result.contains("corrupt xref table"));
}

#[tokio::test]
async fn read_docx_renders_conversion_failure() {
    let service = DocumentService::with_converter(Arc::new(FailingConverter));
    let result = service
        .read_document(DocumentKind::Docx, "/tmp/broken.docx")
        .await;

    assert!(result.starts_with("Error reading DOCX: "));
    assert!(result.contains("corrupt xref table"));
}

#[tokio::test]
async fn absent_text_content_reads_as_empty_string() {
    let service = DocumentService::with_converter(Arc::new(EmptyConverter));
    let result = service
        .read_document(DocumentKind::Pdf, "/tmp/blank.pdf")
        .await;
    assert_eq!(result, "");
}

#[tokio::test]
async fn unsupported_local_file_is_reported() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"plain text, not a document").unwrap();

    let service = DocumentService::new();
    let result = service
        .read_document(DocumentKind::Pdf, file.path().to_str().unwrap())
        .await;

    assert!(result.starts_with("Error reading PDF: "));
    assert!(result.contains("unsupported document format"));
}

fn sample_docx(paragraphs: &[&str]) -> Vec<u8> {
    let mut buf = std::io::Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut buf);
        zip.start_file("word/document.xml", zip::write::FileOptions::default())
            .unwrap();
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
            .collect();
        zip.write_all(
            format!(
                r#"<?xml version="1.0"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
                body
            )
            .as_bytes(),
        )
        .unwrap();
        zip.finish().unwrap();
    }
    buf.into_inner()
}

#[tokio::test]
async fn real_docx_round_trips_through_default_converter() {
    let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
    file.write_all(&sample_docx(&["Preflight checklist", "Verify fuel load"]))
        .unwrap();

    let service = DocumentService::new();
    let result = service
        .read_document(DocumentKind::Docx, file.path().to_str().unwrap())
        .await;

    assert!(result.starts_with("Preflight checklist"));
    assert!(result.contains("Verify fuel load"));
}

#[tokio::test]
async fn remote_input_downloads_with_derived_extension() {
    let payload = sample_docx(&["Remote doc"]);
    let app = Router::new().route("/files/briefing.docx", get(move || async move { payload }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = format!("http://{}/files/briefing.docx?token=abc", addr);
    let resolved = resolver::resolve(&url).await.unwrap();

    assert!(matches!(resolved, ResolvedInput::Downloaded(_)));
    let name = resolved.path().file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with(".docx"), "unexpected temp name: {}", name);
    assert!(resolved.path().exists());
}

#[tokio::test]
async fn remote_input_without_extension_gets_placeholder() {
    let app = Router::new().route("/download", get(|| async { "bytes" }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let url = format!("http://{}/download", addr);
    let resolved = resolver::resolve(&url).await.unwrap();
    let name = resolved.path().file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with(".tmp"), "unexpected temp name: {}", name);
}

#[tokio::test]
async fn remote_error_status_fails_the_read() {
    let app = Router::new(); // no routes: everything 404s
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let service = DocumentService::new();
    let result = service
        .read_document(
            DocumentKind::Pdf,
            &format!("http://{}/missing.pdf", addr),
        )
        .await;

    assert!(result.starts_with("Error reading PDF: "));
}
