//! Document Tools

use crate::service::{DocumentKind, DocumentService};
use aerodoc_mcp::{Tool, ToolRegistry};
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn register_all(registry: &ToolRegistry, service: Arc<DocumentService>) -> Result<usize> {
    registry
        .register(Arc::new(ReadPdfTool {
            service: service.clone(),
        }))
        .await?;
    registry.register(Arc::new(ReadDocxTool { service })).await?;
    Ok(2)
}

fn file_path_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "file_path": {"type": "string", "description": description}
        },
        "required": ["file_path"]
    })
}

fn required_file_path(input: &Value) -> Result<&str> {
    input
        .get("file_path")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing file_path"))
}

pub struct ReadPdfTool {
    service: Arc<DocumentService>,
}

#[async_trait]
impl Tool for ReadPdfTool {
    fn name(&self) -> &str {
        "Read PDF Document"
    }
    fn description(&self) -> &str {
        "Read a PDF file and return the text content in LLM friendly MarkDown format."
    }
    fn input_schema(&self) -> Value {
        file_path_schema("Path or public URI to the PDF file to read")
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let file_path = required_file_path(&input)?;
        Ok(self
            .service
            .read_document(DocumentKind::Pdf, file_path)
            .await)
    }
}

pub struct ReadDocxTool {
    service: Arc<DocumentService>,
}

#[async_trait]
impl Tool for ReadDocxTool {
    fn name(&self) -> &str {
        "Read DOCX Document"
    }
    fn description(&self) -> &str {
        "Read a DOCX file and return the text content in LLM friendly MarkDown format."
    }
    fn input_schema(&self) -> Value {
        file_path_schema("Path or public URI to the Word document to read")
    }

    async fn execute(&self, input: Value) -> Result<String> {
        let file_path = required_file_path(&input)?;
        Ok(self
            .service
            .read_document(DocumentKind::Docx, file_path)
            .await)
    }
}
