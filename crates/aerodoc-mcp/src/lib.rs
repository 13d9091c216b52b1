//! aerodoc-mcp: MCP host for the aerodoc adapters
//!
//! Transport-agnostic Model Context Protocol server. Adapters register their
//! tools and prompts at startup; the server dispatches JSON-RPC requests to
//! them over stdio or HTTP.
//!
//! Methods:
//! - initialize / initialized → handshake
//! - ping → liveness
//! - tools/list, tools/call → tool registry
//! - prompts/list, prompts/get → prompt registry

pub mod prompts;
pub mod protocol;
pub mod registry;
pub mod server;
pub mod transport;

pub use prompts::{Prompt, PromptArgument, PromptMessage, PromptRegistry};
pub use protocol::{JsonRpcError, McpRequest, McpResponse};
pub use registry::{BoxedTool, Tool, ToolInfo, ToolRegistry};
pub use server::{McpServer, McpServerConfig};

/// Default server name reported during the initialize handshake.
pub const SERVER_NAME: &str = "aerodoc";
/// Server version reported during the initialize handshake.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        BoxedTool, JsonRpcError, McpRequest, McpResponse, McpServer, McpServerConfig, Prompt,
        PromptMessage, PromptRegistry, Tool, ToolRegistry,
    };
}
