//! Transport Layer
//!
//! Two transports, matching how the adapters are deployed:
//! - Stdio (line-delimited JSON-RPC over stdin/stdout)
//! - HTTP (JSON-RPC POST endpoint)

mod http;
mod stdio;

pub use http::HttpTransport;
pub use stdio::StdioTransport;

use anyhow::Result;
use std::sync::Arc;

/// Generic MCP server trait for the transport layer
#[async_trait::async_trait]
pub trait McpHandler: Send + Sync {
    async fn handle_request(&self, request: crate::McpRequest) -> crate::McpResponse;
}

/// Transport trait - implement for new transport types
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Serve requests using this transport
    async fn serve<H: McpHandler + 'static>(self, handler: Arc<H>) -> Result<()>;
}

#[async_trait::async_trait]
impl McpHandler for crate::McpServer {
    async fn handle_request(&self, request: crate::McpRequest) -> crate::McpResponse {
        self.handle_request(request).await
    }
}
