//! MCP Server
//!
//! Core server handling all MCP protocol logic. Transport-agnostic: works the
//! same over stdio and HTTP. Holds the tool and prompt registries built by the
//! adapters at startup.

use crate::prompts::PromptRegistry;
use crate::protocol::{JsonRpcError, McpRequest, McpResponse};
use crate::registry::ToolRegistry;
use crate::{PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Server configuration
#[derive(Debug, Clone)]
pub struct McpServerConfig {
    /// Server name override
    pub name: Option<String>,
    /// Usage instructions sent in the initialize result
    pub instructions: Option<String>,
    /// Maximum tools to return in a listing
    pub max_tools: usize,
}

impl Default for McpServerConfig {
    fn default() -> Self {
        Self {
            name: None,
            instructions: None,
            max_tools: 64,
        }
    }
}

#[derive(Debug, Clone)]
struct ClientInfo {
    name: String,
    version: Option<String>,
}

pub struct McpServer {
    config: McpServerConfig,
    tools: Arc<ToolRegistry>,
    prompts: PromptRegistry,
    /// Client info from the last initialize
    client_info: RwLock<Option<ClientInfo>>,
}

impl McpServer {
    pub fn new(config: McpServerConfig, tools: Arc<ToolRegistry>, prompts: PromptRegistry) -> Self {
        Self {
            config,
            tools,
            prompts,
            client_info: RwLock::new(None),
        }
    }

    pub fn tools(&self) -> &Arc<ToolRegistry> {
        &self.tools
    }

    /// Handle an MCP request
    pub async fn handle_request(&self, request: McpRequest) -> McpResponse {
        debug!(method = %request.method, "Handling MCP request");

        match request.method.as_str() {
            "initialize" => self.handle_initialize(request).await,
            "initialized" | "notifications/initialized" => {
                McpResponse::success(request.id, json!({}))
            }
            "ping" => McpResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request).await,
            "tools/call" => self.handle_tools_call(request).await,
            "prompts/list" => self.handle_prompts_list(request),
            "prompts/get" => self.handle_prompts_get(request),
            _ => McpResponse::error(request.id, JsonRpcError::method_not_found(&request.method)),
        }
    }

    async fn handle_initialize(&self, request: McpRequest) -> McpResponse {
        let client_name = request
            .params
            .as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|ci| ci.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        let client_version = request
            .params
            .as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|ci| ci.get("version"))
            .and_then(|v| v.as_str());

        *self.client_info.write().await = Some(ClientInfo {
            name: client_name.to_string(),
            version: client_version.map(String::from),
        });

        info!(
            client = %client_name,
            version = %client_version.unwrap_or("?"),
            "Client connected"
        );

        let server_name = self.config.name.as_deref().unwrap_or(SERVER_NAME);
        let mut result = json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": { "listChanged": false },
                "prompts": { "listChanged": false }
            },
            "serverInfo": {
                "name": server_name,
                "version": SERVER_VERSION
            }
        });
        if let Some(instructions) = &self.config.instructions {
            result["instructions"] = json!(instructions);
        }

        McpResponse::success(request.id, result)
    }

    async fn handle_tools_list(&self, request: McpRequest) -> McpResponse {
        let tools: Vec<_> = self
            .tools
            .list()
            .await
            .into_iter()
            .take(self.config.max_tools)
            .collect();
        McpResponse::success(request.id, json!({ "tools": tools }))
    }

    async fn handle_tools_call(&self, request: McpRequest) -> McpResponse {
        let params = match &request.params {
            Some(p) => p.clone(),
            None => {
                return McpResponse::error(request.id, JsonRpcError::invalid_params("Missing params"))
            }
        };

        let tool_name = match params.get("name").and_then(|n| n.as_str()) {
            Some(n) => n,
            None => {
                return McpResponse::error(
                    request.id,
                    JsonRpcError::invalid_params("Missing tool name"),
                )
            }
        };

        let tool = match self.tools.get(tool_name).await {
            Some(t) => t,
            None => {
                warn!(tool = %tool_name, "Unknown tool requested");
                return McpResponse::error(
                    request.id,
                    JsonRpcError::invalid_params(format!("Unknown tool: {}", tool_name)),
                );
            }
        };

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match tool.execute(arguments).await {
            Ok(text) => McpResponse::success(
                request.id,
                json!({
                    "content": [{ "type": "text", "text": text }],
                    "isError": false
                }),
            ),
            // Handlers render their own failures into the returned string, so
            // an Err here means the arguments did not match the schema.
            Err(e) => McpResponse::success(
                request.id,
                json!({
                    "content": [{ "type": "text", "text": format!("Error: {}", e) }],
                    "isError": true
                }),
            ),
        }
    }

    fn handle_prompts_list(&self, request: McpRequest) -> McpResponse {
        let prompts: Vec<Value> = self
            .prompts
            .list()
            .iter()
            .map(|p| {
                json!({
                    "name": p.name(),
                    "description": p.description(),
                    "arguments": p.arguments()
                })
            })
            .collect();
        McpResponse::success(request.id, json!({ "prompts": prompts }))
    }

    fn handle_prompts_get(&self, request: McpRequest) -> McpResponse {
        let name = match request.param_str("name") {
            Some(n) => n.to_string(),
            None => {
                return McpResponse::error(
                    request.id,
                    JsonRpcError::invalid_params("Missing prompt name"),
                )
            }
        };

        let prompt = match self.prompts.get(&name) {
            Some(p) => p,
            None => {
                return McpResponse::error(
                    request.id,
                    JsonRpcError::invalid_params(format!("Unknown prompt: {}", name)),
                )
            }
        };

        let arguments = request
            .params
            .as_ref()
            .and_then(|p| p.get("arguments"))
            .cloned()
            .unwrap_or(json!({}));

        let messages: Vec<Value> = prompt
            .render(&arguments)
            .iter()
            .map(|m| m.to_wire())
            .collect();

        McpResponse::success(
            request.id,
            json!({
                "description": prompt.description(),
                "messages": messages
            }),
        )
    }
}
